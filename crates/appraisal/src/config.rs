//! Appraisal configuration

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Appraisal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalConfig {
    /// A listing qualifies while its rank stays below this threshold
    pub threshold: i32,

    /// Year the listing age is measured against
    pub reference_year: i32,
}

impl Default for AppraisalConfig {
    fn default() -> Self {
        Self {
            threshold: 26,
            reference_year: chrono::Utc::now().year(),
        }
    }
}

impl AppraisalConfig {
    /// Config with a fixed reference year, for reproducible scoring
    pub fn pinned(threshold: i32, reference_year: i32) -> Self {
        Self {
            threshold,
            reference_year,
        }
    }
}
