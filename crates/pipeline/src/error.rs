//! Pipeline Error Types

use thiserror::Error;

/// Errors running the appraisal pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration rejected before any thread starts
    #[error("Invalid pipeline config: {0}")]
    InvalidConfig(&'static str),

    /// A worker thread panicked before finishing its loop
    #[error("Worker thread panicked")]
    WorkerPanicked,
}
