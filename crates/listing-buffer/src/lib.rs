//! Bounded Listing Buffer
//!
//! Provides the blocking ring buffer monitor between the producer and the
//! appraisal workers.

mod buffer;

pub use buffer::ListingBuffer;
