use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Project;
use crate::showcase::Showcase;

pub fn run(showcase: &Showcase, search: Option<&str>) -> Result<CmdResult> {
    let listed: Vec<Project> = match search {
        Some(term) => {
            let needle = term.to_lowercase();
            showcase
                .projects()
                .iter()
                .filter(|p| matches(p, &needle))
                .cloned()
                .collect()
        }
        None => showcase.projects().to_vec(),
    };

    Ok(CmdResult::default().with_listed(listed))
}

fn matches(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.subtitle.to_lowercase().contains(needle)
        || project
            .technologies
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::ProjectDraft;

    fn draft(title: &str, tech: &[&str]) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            subtitle: "Sub".to_string(),
            description: "Desc".to_string(),
            technologies: tech.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn lists_in_insertion_order() {
        let mut showcase = Showcase::empty();
        add::run(&mut showcase, draft("A", &[])).unwrap();
        add::run(&mut showcase, draft("B", &[])).unwrap();

        let result = run(&showcase, None).unwrap();
        let titles: Vec<_> = result.listed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let mut showcase = Showcase::empty();
        add::run(&mut showcase, draft("EasyChat", &[])).unwrap();
        add::run(&mut showcase, draft("Other", &[])).unwrap();

        let result = run(&showcase, Some("easychat")).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].title, "EasyChat");
    }

    #[test]
    fn search_matches_technologies() {
        let mut showcase = Showcase::empty();
        add::run(&mut showcase, draft("A", &["Kotlin"])).unwrap();
        add::run(&mut showcase, draft("B", &["Rust"])).unwrap();

        let result = run(&showcase, Some("rust")).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].title, "B");
    }

    #[test]
    fn search_with_no_match_lists_nothing() {
        let showcase = Showcase::seeded();
        let result = run(&showcase, Some("nonexistent")).unwrap();
        assert!(result.listed.is_empty());
    }
}
