//! Appraisal Worker Loop

use appraisal::Appraiser;
use listing_buffer::ListingBuffer;
use listing_intake::RankedListing;
use rank_board::RankBoard;
use tracing::debug;

/// Drain the buffer until the end-of-stream sentinel shows up
///
/// Returns the number of listings this worker appraised. Workers are
/// symmetric; which worker dequeues which listing is unspecified.
pub(crate) fn run_worker(
    id: usize,
    buffer: &ListingBuffer,
    board: &RankBoard,
    appraiser: &Appraiser,
) -> usize {
    let mut appraised = 0;
    loop {
        let listing = buffer.take();
        if listing.is_end_of_stream() {
            break;
        }

        let rank = appraiser.rank(&listing);
        appraised += 1;
        if appraiser.qualifies(rank) {
            board.insert(RankedListing { listing, rank });
        }
    }
    debug!("Worker {} finished after {} listings", id, appraised);
    appraised
}
