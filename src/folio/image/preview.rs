//! Transient preview references for staged uploads.
//!
//! Staging a file derives a process-local handle to its bytes, usable
//! for display until released. Handles are an explicit resource: the
//! slot releases them when they are superseded, on cancel, and on
//! teardown. The registry tracks every live handle, so a leaked handle
//! is observable rather than silently accumulating.

use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use super::StagedFile;

/// A process-local reference to a staged file's bytes. Renders as
/// `preview://{id}`. Not durable across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewHandle(Uuid);

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preview://{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct PreviewData {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct PreviewRegistry {
    entries: HashMap<Uuid, PreviewData>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a fresh handle from the file's bytes.
    pub fn acquire(&mut self, file: &StagedFile) -> PreviewHandle {
        let id = Uuid::new_v4();
        self.entries.insert(
            id,
            PreviewData {
                name: file.name.clone(),
                media_type: file.media_type.clone(),
                bytes: file.bytes.clone(),
            },
        );
        PreviewHandle(id)
    }

    /// Releases a handle. Releasing an unknown handle is a no-op.
    pub fn release(&mut self, handle: &PreviewHandle) {
        self.entries.remove(&handle.0);
    }

    pub fn resolve(&self, handle: &PreviewHandle) -> Option<&PreviewData> {
        self.entries.get(&handle.0)
    }

    /// Number of live handles.
    pub fn live(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> StagedFile {
        StagedFile::new("photo.png", "image/png", vec![0u8; 16])
    }

    #[test]
    fn acquire_then_resolve() {
        let mut registry = PreviewRegistry::new();
        let handle = registry.acquire(&file());

        let data = registry.resolve(&handle).unwrap();
        assert_eq!(data.media_type, "image/png");
        assert_eq!(data.bytes.len(), 16);
        assert_eq!(registry.live(), 1);
    }

    #[test]
    fn release_drops_the_entry() {
        let mut registry = PreviewRegistry::new();
        let handle = registry.acquire(&file());
        registry.release(&handle);
        assert!(registry.resolve(&handle).is_none());
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn releasing_twice_is_harmless() {
        let mut registry = PreviewRegistry::new();
        let handle = registry.acquire(&file());
        registry.release(&handle);
        registry.release(&handle);
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn handles_are_distinct_per_acquire() {
        let mut registry = PreviewRegistry::new();
        let a = registry.acquire(&file());
        let b = registry.acquire(&file());
        assert_ne!(a, b);
        assert_eq!(registry.live(), 2);
    }
}
