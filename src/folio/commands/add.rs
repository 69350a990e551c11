use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProjectDraft;
use crate::showcase::Showcase;

use super::helpers::validate_draft;

pub fn run(showcase: &mut Showcase, draft: ProjectDraft) -> Result<CmdResult> {
    validate_draft(&draft)?;
    let project = showcase.insert(draft);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Project added ({}): {}",
        project.id, project.title
    )));
    result.affected.push(project);
    Ok(result)
}
