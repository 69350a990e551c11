use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use folio::api::FolioApi;
use folio::commands::{draft, CmdMessage, Confirmation, MessageLevel};
use folio::config::FolioConfig;
use folio::error::{FolioError, Result};
use folio::image::{media_type_for, StagedFile};
use folio::model::{Project, ProjectDraft, ProjectId};
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, ImageCommands, ProjectCommands, ProjectFields};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: FolioApi,
    config: FolioConfig,
    config_dir: PathBuf,
    assume_yes: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Commands::Project(cmd) => handle_project(&mut ctx, cmd),
        Commands::Image(cmd) => handle_image(&mut ctx, cmd),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let config_dir = ProjectDirs::from("com", "folio", "folio")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".folio"));
    let config = FolioConfig::load(&config_dir).unwrap_or_default();

    AppContext {
        api: FolioApi::new(),
        config,
        config_dir,
        assume_yes: cli.yes,
    }
}

fn handle_project(ctx: &mut AppContext, cmd: ProjectCommands) -> Result<()> {
    match cmd {
        ProjectCommands::Add { fields } => {
            let result = ctx.api.add_project(build_draft(fields))?;
            print_messages(&result.messages);
            Ok(())
        }
        ProjectCommands::Edit { id, fields } => {
            let result = ctx.api.update_project(ProjectId(id), build_draft(fields))?;
            print_messages(&result.messages);
            Ok(())
        }
        ProjectCommands::Remove { id } => {
            let confirm = confirm(
                "Are you sure you want to delete this project?",
                ctx.assume_yes,
            )?;
            let result = ctx.api.remove_project(ProjectId(id), confirm)?;
            print_messages(&result.messages);
            Ok(())
        }
        ProjectCommands::List { search } => {
            let result = ctx.api.list_projects(search.as_deref())?;
            print_projects(&result.listed, ctx.config.line_width);
            print_messages(&result.messages);
            Ok(())
        }
        ProjectCommands::View { id } => {
            let project = ctx
                .api
                .get_project(ProjectId(id))
                .ok_or(FolioError::ProjectNotFound(ProjectId(id)))?;
            print_full_project(project);
            Ok(())
        }
        ProjectCommands::Export => {
            let result = ctx.api.list_projects(None)?;
            println!("{}", serde_json::to_string_pretty(&result.listed)?);
            Ok(())
        }
    }
}

fn handle_image(ctx: &mut AppContext, cmd: ImageCommands) -> Result<()> {
    match cmd {
        ImageCommands::Show => {
            match ctx.api.image_reference() {
                Some(reference) => println!("{}", reference),
                None => println!("{} {}", "(default)".dimmed(), ctx.config.default_image),
            }
            Ok(())
        }
        ImageCommands::SetUrl { url } => {
            let staged = ctx.api.stage_image_url(&url)?;
            print_messages(&staged.messages);
            let committed = ctx.api.commit_image()?;
            print_messages(&committed.messages);
            Ok(())
        }
        ImageCommands::Upload { path, media_type } => {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload")
                .to_string();
            let media_type = media_type.unwrap_or_else(|| media_type_for(&name));
            let bytes = std::fs::read(&path)?;

            let staged = ctx
                .api
                .stage_image_file(&StagedFile::new(name, media_type, bytes))?;
            print_messages(&staged.messages);
            let committed = ctx.api.commit_image()?;
            print_messages(&committed.messages);
            Ok(())
        }
        ImageCommands::Remove => {
            let confirm = confirm(
                "Are you sure you want to remove this image?",
                ctx.assume_yes,
            )?;
            let result = ctx.api.remove_image(confirm)?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("default-image = {}", ctx.config.default_image);
            println!("line-width = {}", ctx.config.line_width);
        }
        (Some("default-image"), None) => println!("{}", ctx.config.default_image),
        (Some("default-image"), Some(v)) => {
            ctx.config.default_image = v;
            ctx.config.save(&ctx.config_dir)?;
            println!("default-image = {}", ctx.config.default_image);
        }
        (Some("line-width"), None) => println!("{}", ctx.config.line_width),
        (Some("line-width"), Some(v)) => match v.parse::<usize>() {
            Ok(width) => {
                ctx.config.line_width = width;
                ctx.config.save(&ctx.config_dir)?;
                println!("line-width = {}", ctx.config.line_width);
            }
            Err(_) => println!("Invalid line width: {}", v),
        },
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

// The draft is edited the way the dialog edits it: entries go through
// the scratch-buffer rules (trim, dedup, append) before commit.
fn build_draft(fields: ProjectFields) -> ProjectDraft {
    let mut project_draft = ProjectDraft {
        title: fields.title,
        subtitle: fields.subtitle,
        description: fields.description,
        demo_link: fields.demo,
        github_link: fields.github,
        video_demo: fields.video,
        ..Default::default()
    };
    for tech in &fields.technologies {
        draft::add_entry(&mut project_draft.technologies, tech);
    }
    for feature in &fields.features {
        draft::add_entry(&mut project_draft.features, feature);
    }
    project_draft
}

fn confirm(prompt: &str, assume_yes: bool) -> Result<Confirmation> {
    if assume_yes {
        return Ok(Confirmation::Confirmed);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Declined,
    })
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const TIME_WIDTH: usize = 14;

fn print_projects(projects: &[Project], line_width: usize) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    for project in projects {
        let idx_str = format!("{}. ", project.id);
        let left_prefix = "    ";

        let time_ago = format_time_ago(project.updated_at);

        let title_content = format!("{}  {}", project.title, project.subtitle);
        let fixed_width = left_prefix.width() + idx_str.width() + 2 + TIME_WIDTH;
        let available = line_width.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}  {}",
            left_prefix,
            idx_str,
            title_display.bold(),
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn print_full_project(project: &Project) {
    println!("{} {}", project.id.to_string().yellow(), project.title.bold());
    println!("{}", project.subtitle);
    println!("--------------------------------");
    println!("{}", project.description);

    if !project.technologies.is_empty() {
        println!();
        println!("Technologies: {}", project.technologies.join(", "));
    }
    if !project.features.is_empty() {
        println!();
        println!("Key features:");
        for feature in &project.features {
            println!("  - {}", feature);
        }
    }

    let links = [
        ("Demo", &project.demo_link),
        ("GitHub", &project.github_link),
        ("Video", &project.video_demo),
    ];
    if links.iter().any(|(_, link)| link.is_some()) {
        println!();
        for (label, link) in links {
            if let Some(url) = link {
                println!("{:<7} {}", format!("{}:", label), url);
            }
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
