//! Intake Error Types

use thiserror::Error;

/// Errors reading the listing dataset
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Dataset file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset was not a valid JSON listing array
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
