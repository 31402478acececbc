//! Purchase Rank Scoring

use crate::AppraisalConfig;
use listing_intake::Listing;

/// Scores listings and applies the selection criterion
///
/// Scoring is a pure function of the listing and the config, so one
/// appraiser is shared by all workers without synchronization.
pub struct Appraiser {
    config: AppraisalConfig,
}

impl Appraiser {
    /// Create a new appraiser with given config
    pub fn new(config: AppraisalConfig) -> Self {
        Self { config }
    }

    /// Compute the purchase rank: listing age in years plus thousands of
    /// kilometres travelled. Lower is better.
    pub fn rank(&self, listing: &Listing) -> i32 {
        (self.config.reference_year - listing.year) + (listing.distance / 1_000.0) as i32
    }

    /// Whether a rank qualifies for the result board
    pub fn qualifies(&self, rank: i32) -> bool {
        rank < self.config.threshold
    }
}

impl Default for Appraiser {
    fn default() -> Self {
        Self::new(AppraisalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appraiser() -> Appraiser {
        Appraiser::new(AppraisalConfig::pinned(26, 2026))
    }

    #[test]
    fn test_rank_combines_age_and_distance() {
        let appraiser = appraiser();
        assert_eq!(appraiser.rank(&Listing::new("Honda", 2016, 0.0)), 10);
        assert_eq!(appraiser.rank(&Listing::new("Yamaha", 2026, 12_500.0)), 12);
        assert_eq!(appraiser.rank(&Listing::new("Suzuki", 2020, 4_999.9)), 10);
    }

    #[test]
    fn test_distance_truncates_to_whole_thousands() {
        let appraiser = appraiser();
        assert_eq!(appraiser.rank(&Listing::new("KTM", 2026, 999.9)), 0);
        assert_eq!(appraiser.rank(&Listing::new("KTM", 2026, 1_000.0)), 1);
    }

    #[test]
    fn test_qualifies_strictly_below_threshold() {
        let appraiser = appraiser();
        assert!(appraiser.qualifies(25));
        assert!(!appraiser.qualifies(26));
        assert!(!appraiser.qualifies(40));
    }
}
