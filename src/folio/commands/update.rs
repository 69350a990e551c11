use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::model::{ProjectDraft, ProjectId};
use crate::showcase::Showcase;

use super::helpers::validate_draft;

pub fn run(showcase: &mut Showcase, id: ProjectId, draft: ProjectDraft) -> Result<CmdResult> {
    if !showcase.contains(id) {
        return Err(FolioError::ProjectNotFound(id));
    }
    validate_draft(&draft)?;

    let project = showcase
        .get_mut(id)
        .ok_or(FolioError::ProjectNotFound(id))?;
    project.apply(draft);
    let updated = project.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Project updated ({}): {}",
        updated.id, updated.title
    )));
    result.affected.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            subtitle: "Sub".to_string(),
            description: "Desc".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn replaces_fields_in_place() {
        let mut showcase = Showcase::empty();
        add::run(&mut showcase, draft("A")).unwrap();
        let b = add::run(&mut showcase, draft("B")).unwrap().affected[0].clone();
        add::run(&mut showcase, draft("C")).unwrap();

        let mut d = draft("B Updated");
        d.features = vec!["Offline mode".to_string()];
        run(&mut showcase, b.id, d).unwrap();

        let titles: Vec<_> = showcase.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B Updated", "C"]);
        assert_eq!(
            showcase.get(b.id).unwrap().features,
            vec!["Offline mode".to_string()]
        );
    }

    #[test]
    fn unknown_id_fails_and_leaves_collection_unchanged() {
        let mut showcase = Showcase::seeded();
        let before: Vec<String> = showcase.projects().iter().map(|p| p.title.clone()).collect();

        let result = run(&mut showcase, ProjectId(42), draft("X"));
        assert!(matches!(result, Err(FolioError::ProjectNotFound(ProjectId(42)))));

        let after: Vec<String> = showcase.projects().iter().map(|p| p.title.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removed_id_is_never_resurrected() {
        let mut showcase = Showcase::seeded();
        let id = showcase.projects()[0].id;
        super::super::remove::run(&mut showcase, id, crate::commands::Confirmation::Confirmed)
            .unwrap();

        let result = run(&mut showcase, id, draft("Ghost"));
        assert!(matches!(result, Err(FolioError::ProjectNotFound(_))));
        assert!(showcase.is_empty());
    }

    #[test]
    fn rejects_blank_subtitle() {
        let mut showcase = Showcase::seeded();
        let id = showcase.projects()[0].id;
        let mut d = draft("A");
        d.subtitle = " ".to_string();
        let result = run(&mut showcase, id, d);
        assert!(matches!(result, Err(FolioError::EmptyField("subtitle"))));
        assert_eq!(showcase.projects()[0].title, "EasyChat");
    }
}
