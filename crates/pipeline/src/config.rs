//! Pipeline configuration

use appraisal::AppraisalConfig;
use serde::{Deserialize, Serialize};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of appraisal worker threads
    pub worker_count: usize,

    /// Buffer capacity; `None` sizes it to half the input count
    pub buffer_capacity: Option<usize>,

    /// Scoring and selection settings
    pub appraisal: AppraisalConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            worker_count: 10,
            buffer_capacity: None,
            appraisal: AppraisalConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Effective buffer capacity for an input of `input_len` listings
    ///
    /// Stays at least 1 so an empty input still has a slot for the
    /// end-of-stream sentinel.
    pub fn effective_buffer_capacity(&self, input_len: usize) -> usize {
        self.buffer_capacity.unwrap_or_else(|| (input_len / 2).max(1))
    }
}
