//! Pipeline Driver

use crate::worker::run_worker;
use crate::{PipelineConfig, PipelineError};
use appraisal::Appraiser;
use listing_buffer::ListingBuffer;
use listing_intake::{Listing, RankedListing};
use rank_board::RankBoard;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

/// Run the full appraisal pipeline over the given listings
///
/// Spawns the worker pool, feeds every listing through the bounded buffer
/// followed by the end-of-stream sentinel, joins the pool and only then
/// reads the board, so the report phase never races a writer.
pub fn run(
    config: &PipelineConfig,
    listings: &[Listing],
) -> Result<Vec<RankedListing>, PipelineError> {
    if config.worker_count == 0 {
        return Err(PipelineError::InvalidConfig(
            "worker_count must be at least 1",
        ));
    }
    if config.buffer_capacity == Some(0) {
        return Err(PipelineError::InvalidConfig(
            "buffer_capacity must be at least 1",
        ));
    }

    let capacity = config.effective_buffer_capacity(listings.len());
    let buffer = Arc::new(ListingBuffer::new(capacity));
    let board = Arc::new(RankBoard::new(listings.len()));
    let appraiser = Arc::new(Appraiser::new(config.appraisal.clone()));

    info!(
        "Starting pipeline: {} listings, {} workers, buffer capacity {}",
        listings.len(),
        config.worker_count,
        capacity
    );

    let workers: Vec<_> = (0..config.worker_count)
        .map(|id| {
            let buffer = Arc::clone(&buffer);
            let board = Arc::clone(&board);
            let appraiser = Arc::clone(&appraiser);
            thread::spawn(move || run_worker(id, &buffer, &board, &appraiser))
        })
        .collect();

    for listing in listings {
        buffer.put(listing.clone());
    }
    buffer.close();
    debug!("Producer done, waiting for workers");

    let mut appraised = 0;
    for worker in workers {
        appraised += worker.join().map_err(|_| PipelineError::WorkerPanicked)?;
    }

    info!(
        "Pipeline finished: {} listings appraised, {} qualified",
        appraised,
        board.len()
    );
    Ok(board.results())
}
