//! Photos command handler.
//!
//! Lists the photo records of a pin and whether each image is cached.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_cursor, print_separator, truncate_string};

/// Execute the photos command.
pub async fn execute(ctx: &CliContext, location_id: i64) -> Result<()> {
    let location = ctx.service().get_location(location_id).await?;
    let photos = ctx.service().photos_for_location(location_id).await?;

    println!(
        "Location {} at {}, page {}",
        location.id,
        location.coordinate,
        format_cursor(location.cursor)
    );

    if photos.is_empty() {
        println!("No photos. Use 'geoalbum fetch {location_id}' to load the current page.");
        return Ok(());
    }

    println!();
    println!("{:<6} {:<30} {:<7} Source", "ID", "Title", "Cached");
    print_separator(90);

    for photo in photos {
        let cached = ctx.service().cache().contains(&photo.source_url).await;
        let title = if photo.title.is_empty() {
            "--"
        } else {
            photo.title.as_str()
        };
        println!(
            "{:<6} {:<30} {:<7} {}",
            photo.id,
            truncate_string(title, 29),
            if cached { "yes" } else { "no" },
            photo.source_url
        );
    }

    Ok(())
}
