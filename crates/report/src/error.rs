//! Report Error Types

use thiserror::Error;

/// Errors writing the report file
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report file could not be written
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
