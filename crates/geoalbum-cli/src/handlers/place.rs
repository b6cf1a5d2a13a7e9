//! Place command handler.

use anyhow::Result;
use geoalbum_core::Coordinate;

use crate::bootstrap::CliContext;
use crate::presentation::format_cursor;

/// Execute the place command.
///
/// Creates the pin (or reuses the one already at this coordinate) and makes
/// sure it has photos, fetching its current page if it has none.
pub async fn execute(ctx: &CliContext, latitude: f64, longitude: f64) -> Result<()> {
    let location = ctx
        .service()
        .place_location(Coordinate::new(latitude, longitude))
        .await?;
    println!("Location {} at {}", location.id, location.coordinate);

    let photos = ctx.service().provision(location.id).await?;
    let location = ctx.service().get_location(location.id).await?;
    println!(
        "{} photo(s), page {}",
        photos.len(),
        format_cursor(location.cursor)
    );

    Ok(())
}
