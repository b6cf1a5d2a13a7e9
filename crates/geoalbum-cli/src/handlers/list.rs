//! List command handler.
//!
//! Displays all pins in a formatted table.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_cursor, print_separator};

/// Execute the list command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let locations = ctx.service().list_locations().await?;

    if locations.is_empty() {
        println!("No locations yet.");
        println!("Use 'geoalbum place <lat> <lon>' to drop your first pin.");
        return Ok(());
    }

    println!("Found {} location(s):\n", locations.len());
    println!(
        "{:<5} {:<12} {:<12} {:<9} {:<7} Added",
        "ID", "Latitude", "Longitude", "Page", "Photos"
    );
    print_separator(70);

    for location in locations {
        println!(
            "{:<5} {:<12.6} {:<12.6} {:<9} {:<7} {}",
            location.id,
            location.coordinate.latitude,
            location.coordinate.longitude,
            format_cursor(location.cursor),
            location.photo_count,
            location.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }

    Ok(())
}
