use thiserror::Error;

use crate::model::ProjectId;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("File too large: {0} bytes (limit is {limit} bytes)", limit = crate::image::MAX_FILE_BYTES)]
    FileTooLarge(u64),

    #[error("Not an image file: {0}")]
    UnsupportedFileType(String),

    #[error("{0}")]
    EmptyInput(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
