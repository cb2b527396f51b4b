//! Station index error types.

/// Errors that can occur when loading the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Dataset file could not be read
    #[error("failed to read station dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not a JSON array of `{code, name}` records
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
