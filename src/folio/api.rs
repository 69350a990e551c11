//! # API Facade
//!
//! The API layer is a **thin facade** over the two editors. It is the
//! single entry point for all folio operations, regardless of the UI
//! being used.
//!
//! The facade owns the session state: the showcase, the image slot, and
//! the preview registry backing staged uploads. It dispatches to the
//! command functions and slot operations, wraps outcomes in
//! [`CmdResult`] for uniform presentation, and never touches stdout,
//! stderr, or the process exit code. That is the display layer's job.
//!
//! Destructive operations take a [`Confirmation`] token. The facade
//! never assumes consent; the display layer asks the user and passes
//! the answer down.

use crate::commands::{self, CmdMessage, CmdResult, Confirmation};
use crate::error::Result;
use crate::image::preview::PreviewRegistry;
use crate::image::{ImageRef, ImageSlot, StagedFile};
use crate::model::{Project, ProjectDraft, ProjectId};
use crate::showcase::Showcase;

pub struct FolioApi {
    showcase: Showcase,
    slot: ImageSlot,
    previews: PreviewRegistry,
}

impl Default for FolioApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FolioApi {
    /// Starts a session from the fixed seed state.
    pub fn new() -> Self {
        Self {
            showcase: Showcase::seeded(),
            slot: ImageSlot::new(),
            previews: PreviewRegistry::new(),
        }
    }

    // --- Collection editor ---

    pub fn add_project(&mut self, draft: ProjectDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.showcase, draft)
    }

    pub fn update_project(&mut self, id: ProjectId, draft: ProjectDraft) -> Result<CmdResult> {
        commands::update::run(&mut self.showcase, id, draft)
    }

    pub fn remove_project(&mut self, id: ProjectId, confirm: Confirmation) -> Result<CmdResult> {
        commands::remove::run(&mut self.showcase, id, confirm)
    }

    pub fn list_projects(&self, search: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.showcase, search)
    }

    pub fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.showcase.get(id)
    }

    // --- Image slot editor ---

    pub fn stage_image_url(&mut self, url: &str) -> Result<CmdResult> {
        self.slot.stage_url(url, &mut self.previews)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Image preview staged. Save to apply."));
        Ok(result)
    }

    pub fn stage_image_file(&mut self, file: &StagedFile) -> Result<CmdResult> {
        let handle = self.slot.stage_file(file, &mut self.previews)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Image preview staged: {}",
            handle
        )));
        Ok(result)
    }

    pub fn commit_image(&mut self) -> Result<CmdResult> {
        let committed = self.slot.commit(&mut self.previews)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Image updated successfully: {}",
            committed
        )));
        Ok(result)
    }

    pub fn cancel_image(&mut self) -> Result<CmdResult> {
        self.slot.cancel(&mut self.previews);
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Staged image discarded."));
        Ok(result)
    }

    pub fn remove_image(&mut self, confirm: Confirmation) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if confirm == Confirmation::Declined {
            result.add_message(CmdMessage::info("Removal cancelled."));
            return Ok(result);
        }
        self.slot.clear(&mut self.previews);
        result.add_message(CmdMessage::success("Image removed successfully."));
        Ok(result)
    }

    /// The committed image reference, if any. Absent means the display
    /// layer shows its configured default.
    pub fn image_reference(&self) -> Option<&ImageRef> {
        self.slot.reference()
    }

    /// The staged candidate to preview while the image dialog is open.
    pub fn image_preview(&self) -> Option<ImageRef> {
        self.slot.pending_preview()
    }

    /// Number of live transient preview references.
    pub fn live_previews(&self) -> usize {
        self.previews.live()
    }

    /// Releases every transient reference before the session goes away.
    pub fn teardown(&mut self) {
        self.slot.teardown(&mut self.previews);
    }
}
