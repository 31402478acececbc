//! Report Formatting

use crate::ReportError;
use listing_intake::{Listing, RankedListing};
use std::fs;
use std::path::Path;
use tracing::info;

const INPUT_WIDTH: usize = 42;
const OUTPUT_WIDTH: usize = 48;

/// Render the two-section report
///
/// The input section lists every listing as read; the output section lists
/// the qualifying appraisals in their final board order.
pub fn render_report(inputs: &[Listing], results: &[RankedListing]) -> String {
    let mut out = String::new();
    let input_rule = "━".repeat(INPUT_WIDTH);
    let output_rule = "━".repeat(OUTPUT_WIDTH);

    out.push_str(&input_rule);
    out.push('\n');
    out.push_str(&format!("┃{:>25}{:>16}\n", "INPUT DATA", "┃"));
    out.push_str(&input_rule);
    out.push('\n');
    out.push_str(&format!(
        "┃{:<13}┃{:>10}┃{:>15}┃\n",
        "Manufacturer", "Year", "Distance"
    ));
    out.push_str(&input_rule);
    out.push('\n');
    for listing in inputs {
        out.push_str(&format!(
            "┃{:<13}┃{:>10}┃{:>15.2}┃\n",
            listing.manufacturer, listing.year, listing.distance
        ));
    }
    out.push_str(&input_rule);
    out.push_str("\n\n");

    out.push_str(&output_rule);
    out.push('\n');
    out.push_str(&format!("┃{:>29}{:>18}\n", "OUTPUT DATA", "┃"));
    out.push_str(&output_rule);
    out.push('\n');
    out.push_str(&format!(
        "┃{:<13}┃{:>10}┃{:>15}┃{:>5}┃\n",
        "Manufacturer", "Year", "Distance", "Rank"
    ));
    out.push_str(&output_rule);
    out.push('\n');
    for result in results {
        out.push_str(&format!(
            "┃{:<13}┃{:>10}┃{:>15.2}┃{:>5}┃\n",
            result.listing.manufacturer,
            result.listing.year,
            result.listing.distance,
            result.rank
        ));
    }
    out.push_str(&output_rule);
    out.push('\n');

    out
}

/// Render the report and write it to a file
pub fn write_report(
    path: impl AsRef<Path>,
    inputs: &[Listing],
    results: &[RankedListing],
) -> Result<(), ReportError> {
    let path = path.as_ref();
    fs::write(path, render_report(inputs, results))?;
    info!("Report written to {}", path.display());
    Ok(())
}
