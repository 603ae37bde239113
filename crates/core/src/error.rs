use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReelnotesError {
    #[error("Invalid annotation {id}: {reason}")]
    InvalidAnnotation { id: String, reason: String },

    #[error("Duplicate annotation id: {id}")]
    DuplicateId { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReelnotesError>;

/// Failures reported by external collaborators. Never fatal to the view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Seek to {seconds}s failed: {reason}")]
    SeekFailed { seconds: f64, reason: String },

    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    #[error("Segment export failed for {id}: {reason}")]
    ExportFailed { id: String, reason: String },
}
