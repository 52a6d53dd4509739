//! Display utilities for formatting CLI output.
//!
//! This module provides table row structures and formatting functions
//! for presenting GDAL driver information in a human-readable format.

use tabled::{Table, Tabled};

use geoprobe_core::DriverSummary;

/// Table row representation for displaying driver information.
#[derive(Tabled)]
pub struct DriverRow {
    /// Short identifier for the driver (e.g., `GTiff`, `GPKG`).
    #[tabled(rename = "Short Name")]
    pub short_name: String,
    /// Full descriptive name of the driver format.
    #[tabled(rename = "Long Name")]
    pub long_name: String,
    /// Kinds of data the driver handles (raster, vector, or both).
    #[tabled(rename = "Kind")]
    pub kind: String,
}

impl From<&DriverSummary> for DriverRow {
    fn from(d: &DriverSummary) -> Self {
        Self {
            short_name: d.short_name.clone(),
            long_name: d.long_name.clone(),
            kind: d.kind().to_string(),
        }
    }
}

/// Renders the driver table, including its header line.
#[must_use]
pub fn format_drivers(drivers: &[DriverSummary]) -> String {
    let rows: Vec<DriverRow> = drivers.iter().map(DriverRow::from).collect();
    format!(
        "\nRegistered Drivers ({} total):\n\n{}",
        drivers.len(),
        Table::new(rows)
    )
}

/// Display registered drivers in a formatted table on standard output.
pub fn display_drivers(drivers: &[DriverSummary]) {
    println!("{}", format_drivers(drivers));
}
