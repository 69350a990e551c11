use crate::commands::{CmdMessage, CmdResult, Confirmation};
use crate::error::Result;
use crate::model::ProjectId;
use crate::showcase::Showcase;

/// Removes the project with `id` from the showcase.
///
/// This function never prompts. The display layer asks the user and
/// passes the answer in; `Declined` leaves the showcase untouched. A
/// missing id is a no-op, not an error; offering removal of a
/// nonexistent record is the display layer's mistake to avoid.
pub fn run(showcase: &mut Showcase, id: ProjectId, confirm: Confirmation) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if confirm == Confirmation::Declined {
        result.add_message(CmdMessage::info("Removal cancelled."));
        return Ok(result);
    }

    match showcase.remove(id) {
        Some(project) => {
            result.add_message(CmdMessage::success(format!(
                "Project removed ({}): {}",
                project.id, project.title
            )));
            result.affected.push(project);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No project with id {}.", id)));
        }
    }

    Ok(result)
}
