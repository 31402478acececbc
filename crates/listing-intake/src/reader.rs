//! JSON Dataset Reader

use crate::{IntakeError, Listing};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read a listing dataset from a JSON file
///
/// The file holds an array of objects with `manufacturer`, `year` and
/// `distance` keys.
pub fn read_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>, IntakeError> {
    let raw = fs::read_to_string(path)?;
    let listings: Vec<Listing> = serde_json::from_str(&raw)?;
    Ok(listings)
}

/// Read a listing dataset, degrading to an empty one on failure
///
/// A missing or malformed file yields zero listings; the pipeline then
/// processes nothing and terminates normally.
pub fn load_listings(path: impl AsRef<Path>) -> Vec<Listing> {
    let path = path.as_ref();
    match read_listings(path) {
        Ok(listings) => {
            info!("Loaded {} listings from {}", listings.len(), path.display());
            listings
        }
        Err(e) => {
            warn!("Could not load {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
