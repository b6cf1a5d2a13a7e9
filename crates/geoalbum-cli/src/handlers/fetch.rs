//! Fetch and next command handlers.
//!
//! Both replace a pin's photos with one page of search results; `next`
//! rotates to the following page first, wrapping to page 1 after the last.

use anyhow::Result;
use geoalbum_core::ProvisionedPage;

use crate::bootstrap::CliContext;
use crate::presentation::format_cursor;

/// Execute the fetch command: reload the current page.
pub async fn execute(ctx: &CliContext, location_id: i64) -> Result<()> {
    let page = ctx.service().fetch_for_location(location_id).await?;
    print_page(&page);
    Ok(())
}

/// Execute the next command: rotate to the next page.
pub async fn next(ctx: &CliContext, location_id: i64) -> Result<()> {
    let page = ctx.service().advance_page(location_id).await?;
    print_page(&page);
    Ok(())
}

fn print_page(page: &ProvisionedPage) {
    println!(
        "Location {}: page {}, {} photo(s)",
        page.location_id,
        format_cursor(page.cursor),
        page.photos.len()
    );
}
