//! Sorted Rank Board
//!
//! Provides the shared, always-sorted collection of qualifying appraisals.

mod board;

pub use board::RankBoard;
