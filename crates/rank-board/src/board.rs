//! Rank Board Implementation

use listing_intake::RankedListing;
use std::sync::Mutex;
use tracing::debug;

/// Concurrent insertion-sorted result board
///
/// Workers insert qualifying listings under one coarse lock; each insert
/// scans the sorted prefix backward and shifts, O(count) while the lock is
/// held. Ordering invariant: ascending by rank, ties broken by descending
/// model year.
pub struct RankBoard {
    /// Sorted entries
    entries: Mutex<Vec<RankedListing>>,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
}

impl RankBoard {
    /// Create a board sized for at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Insert a ranked listing at its sorted position
    ///
    /// Panics past capacity; total inserts are bounded by the input count,
    /// which the board is sized for.
    pub fn insert(&self, ranked: RankedListing) {
        let mut entries = self.entries.lock().expect("board lock poisoned");
        assert!(
            entries.len() < self.capacity,
            "rank board capacity exceeded"
        );

        let mut i = entries.len();
        while i > 0 {
            let existing = &entries[i - 1];
            let outranked = existing.rank > ranked.rank
                || (existing.rank == ranked.rank
                    && existing.listing.year < ranked.listing.year);
            if !outranked {
                break;
            }
            i -= 1;
        }
        debug!(
            "Placing {} (rank {}) at position {}",
            ranked.listing.manufacturer, ranked.rank, i
        );
        entries.insert(i, ranked);
    }

    /// Number of listings on the board
    pub fn len(&self) -> usize {
        self.entries.lock().expect("board lock poisoned").len()
    }

    /// Check if the board is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the board capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the sorted entries
    ///
    /// The driver calls this once after all workers have joined, so the
    /// snapshot is the final result.
    pub fn results(&self) -> Vec<RankedListing> {
        self.entries.lock().expect("board lock poisoned").clone()
    }
}
