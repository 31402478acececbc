//! Listing Data Model and Intake
//!
//! Provides the motorcycle listing types shared across the pipeline and the
//! JSON dataset reader.

mod error;
mod listing;
mod reader;

pub use error::IntakeError;
pub use listing::{Listing, RankedListing};
pub use reader::{load_listings, read_listings};
