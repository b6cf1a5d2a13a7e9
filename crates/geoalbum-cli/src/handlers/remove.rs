//! Remove command handlers.
//!
//! Deleting a photo or a pin also evicts the cached images.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the remove-photo command.
pub async fn photo(ctx: &CliContext, photo_id: i64) -> Result<()> {
    let removed = ctx.service().delete_photo(photo_id).await?;
    println!(
        "Removed photo {} from location {}.",
        removed.id, removed.location_id
    );
    Ok(())
}

/// Execute the remove-location command.
pub async fn location(ctx: &CliContext, location_id: i64) -> Result<()> {
    let removed = ctx.service().delete_location(location_id).await?;
    println!(
        "Removed location {} at {} and its {} photo(s).",
        removed.id, removed.coordinate, removed.photo_count
    );
    Ok(())
}
