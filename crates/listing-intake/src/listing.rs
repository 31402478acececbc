//! Listing Types

use serde::{Deserialize, Serialize};

/// Reserved manufacturer value marking end of stream
const END_OF_STREAM: &str = "<end-of-stream>";

/// A used motorcycle listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Manufacturer name
    pub manufacturer: String,
    /// Model year
    pub year: i32,
    /// Kilometres travelled
    pub distance: f64,
}

impl Listing {
    /// Create a new listing
    pub fn new(manufacturer: impl Into<String>, year: i32, distance: f64) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            year,
            distance,
        }
    }

    /// The end-of-stream sentinel
    ///
    /// Enqueued once by the producer after the last real listing. Never
    /// scored and never stored on the result board.
    pub fn end_of_stream() -> Self {
        Self {
            manufacturer: END_OF_STREAM.to_string(),
            year: 0,
            distance: 0.0,
        }
    }

    /// Whether this listing is the end-of-stream sentinel
    pub fn is_end_of_stream(&self) -> bool {
        self.manufacturer == END_OF_STREAM
    }
}

/// A listing paired with its computed purchase rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedListing {
    /// The appraised listing
    pub listing: Listing,
    /// Purchase rank (lower is better)
    pub rank: i32,
}
