//! # Image Slot Editor
//!
//! Manages the single profile image reference and its staged candidate.
//!
//! The slot is a small state machine: `Idle → Staging` on
//! [`ImageSlot::stage_url`]/[`ImageSlot::stage_file`], back to `Idle`
//! via [`ImageSlot::commit`] (reference updated), [`ImageSlot::cancel`]
//! (reference unchanged), or [`ImageSlot::clear`] (reference cleared,
//! confirmation-gated by the caller). Re-staging overwrites the pending
//! candidate and releases the superseded preview handle.
//!
//! Preview handles are acquired from a [`preview::PreviewRegistry`] the
//! caller owns and passes into each operation, so every acquire has a
//! matching, observable release.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{FolioError, Result};

pub mod preview;

use preview::{PreviewHandle, PreviewRegistry};

/// Largest accepted upload: 5 MiB.
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// A committed image reference: an external URL or a transient preview
/// handle derived from an uploaded file. Never blank: the absent state
/// is modeled by `Option<ImageRef>` on the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    Preview(PreviewHandle),
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Url(url) => write!(f, "{}", url),
            ImageRef::Preview(handle) => write!(f, "{}", handle),
        }
    }
}

/// An upload as handed over by the display layer: file name, declared
/// media type, raw bytes.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

static EXTENSION_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("svg", "image/svg+xml"),
        ("txt", "text/plain"),
        ("md", "text/markdown"),
        ("pdf", "application/pdf"),
    ])
});

/// Best-effort media type from a file name, for uploads staged from
/// disk. Unknown extensions report as `application/octet-stream`.
pub fn media_type_for(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| EXTENSION_TYPES.get(ext.as_str()).copied())
        .unwrap_or("application/octet-stream")
        .to_string()
}

#[derive(Debug, Default)]
pub struct ImageSlot {
    reference: Option<ImageRef>,
    pending_url: Option<String>,
    pending_file: Option<PreviewHandle>,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed reference, if any. Absent means the display layer
    /// falls back to its default image.
    pub fn reference(&self) -> Option<&ImageRef> {
        self.reference.as_ref()
    }

    /// The candidate the display layer should preview while staging.
    /// A staged file takes precedence over a staged URL.
    pub fn pending_preview(&self) -> Option<ImageRef> {
        if let Some(handle) = &self.pending_file {
            return Some(ImageRef::Preview(handle.clone()));
        }
        self.pending_url.clone().map(ImageRef::Url)
    }

    pub fn is_staging(&self) -> bool {
        self.pending_file.is_some() || self.pending_url.is_some()
    }

    /// Stages a URL candidate. Clears and releases any staged file.
    pub fn stage_url(&mut self, url: &str, previews: &mut PreviewRegistry) -> Result<()> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(FolioError::EmptyInput("Please enter an image URL"));
        }
        if let Some(old) = self.pending_file.take() {
            previews.release(&old);
        }
        self.pending_url = Some(trimmed.to_string());
        Ok(())
    }

    /// Validates an upload and stages it, deriving a transient preview
    /// reference from its bytes. Clears any staged URL; a previously
    /// staged file is released.
    pub fn stage_file(
        &mut self,
        file: &StagedFile,
        previews: &mut PreviewRegistry,
    ) -> Result<PreviewHandle> {
        let size = file.bytes.len() as u64;
        if size > MAX_FILE_BYTES {
            return Err(FolioError::FileTooLarge(size));
        }
        if !file.media_type.starts_with("image/") {
            return Err(FolioError::UnsupportedFileType(file.media_type.clone()));
        }

        let handle = previews.acquire(file);
        if let Some(old) = self.pending_file.replace(handle.clone()) {
            previews.release(&old);
        }
        self.pending_url = None;
        Ok(handle)
    }

    /// Promotes the staged candidate to the committed reference. A
    /// staged file wins over a staged URL. The previously committed
    /// preview handle, if any, is released.
    pub fn commit(&mut self, previews: &mut PreviewRegistry) -> Result<ImageRef> {
        let next = if let Some(handle) = self.pending_file.take() {
            self.pending_url = None;
            ImageRef::Preview(handle)
        } else if let Some(url) = self.pending_url.take() {
            ImageRef::Url(url)
        } else {
            return Err(FolioError::EmptyInput("Please select an image or enter a URL"));
        };

        if let Some(ImageRef::Preview(old)) = self.reference.replace(next.clone()) {
            previews.release(&old);
        }
        Ok(next)
    }

    /// Discards staged state without touching the committed reference.
    pub fn cancel(&mut self, previews: &mut PreviewRegistry) {
        if let Some(handle) = self.pending_file.take() {
            previews.release(&handle);
        }
        self.pending_url = None;
    }

    /// Clears the committed reference back to the absent state and
    /// discards staged state. The caller gates this behind an explicit
    /// confirmation.
    pub fn clear(&mut self, previews: &mut PreviewRegistry) {
        self.cancel(previews);
        if let Some(ImageRef::Preview(handle)) = self.reference.take() {
            previews.release(&handle);
        }
    }

    /// Releases every handle the slot still holds. Call when the slot's
    /// owner goes away.
    pub fn teardown(&mut self, previews: &mut PreviewRegistry) {
        self.clear(previews);
    }
}
