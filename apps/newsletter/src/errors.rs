use thiserror::Error;

/// Application-level error type.
///
/// Formatting and rendering are total and never produce one of these; only
/// the collaborators at the edges (import, export, record loading, index-based
/// edits) can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("No event at position {index} (newsletter has {len} events)")]
    EventIndex { index: usize, len: usize },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Import(format!("CSV parsing failed: {e}"))
    }
}
