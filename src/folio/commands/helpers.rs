use crate::error::{FolioError, Result};
use crate::model::ProjectDraft;

/// Rejects drafts whose required text fields are empty or
/// whitespace-only. Links and list fields are optional.
pub fn validate_draft(draft: &ProjectDraft) -> Result<()> {
    for (field, value) in [
        ("title", &draft.title),
        ("subtitle", &draft.subtitle),
        ("description", &draft.description),
    ] {
        if value.trim().is_empty() {
            return Err(FolioError::EmptyField(field));
        }
    }
    Ok(())
}
