use clap::{Parser, Subcommand};
use once_cell::sync::Lazy;
use std::path::PathBuf;

static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    if GIT_HASH.is_empty() {
        VERSION.to_string()
    } else {
        format!("{}@{}", VERSION, GIT_HASH)
    }
});

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Session-scoped portfolio showcase editor", long_about = None)]
#[command(version, long_version = LONG_VERSION.as_str())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the project showcase
    #[command(subcommand, alias = "p")]
    Project(ProjectCommands),

    /// Manage the profile image slot
    #[command(subcommand, alias = "i")]
    Image(ImageCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (default-image, line-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Add a project to the showcase
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Edit a project (replaces all fields)
    #[command(alias = "e")]
    Edit {
        /// Id of the project
        id: u32,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Remove a project
    #[command(alias = "rm")]
    Remove {
        /// Id of the project
        id: u32,
    },

    /// List projects
    #[command(alias = "ls")]
    List {
        /// Filter by title, subtitle, or technology
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View a project in full
    #[command(alias = "v")]
    View {
        /// Id of the project
        id: u32,
    },

    /// Print the showcase snapshot as JSON
    Export,
}

#[derive(clap::Args, Debug)]
pub struct ProjectFields {
    /// Project title
    #[arg(long)]
    pub title: String,

    /// Project subtitle
    #[arg(long)]
    pub subtitle: String,

    /// Project description
    #[arg(long)]
    pub description: String,

    /// Technology entry (repeatable)
    #[arg(long = "tech")]
    pub technologies: Vec<String>,

    /// Key feature entry (repeatable)
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Live demo link
    #[arg(long)]
    pub demo: Option<String>,

    /// GitHub repository link
    #[arg(long)]
    pub github: Option<String>,

    /// Video demo link
    #[arg(long)]
    pub video: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    /// Show the current image reference
    Show,

    /// Set the image from a URL
    SetUrl {
        /// Image URL
        url: String,
    },

    /// Upload an image file (5 MiB limit)
    Upload {
        /// Path to the image file
        path: PathBuf,

        /// Override the media type detected from the extension
        #[arg(long)]
        media_type: Option<String>,
    },

    /// Remove the image (display falls back to the default)
    #[command(alias = "rm")]
    Remove,
}
