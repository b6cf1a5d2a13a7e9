//! Image command handler.
//!
//! Loads a photo's image through the cache, which downloads it at most once
//! until the photo is removed.

use std::path::Path;

use anyhow::{Result, bail};

use crate::bootstrap::CliContext;

/// Execute the image command.
///
/// Writes the bytes to `out` when given, otherwise reports where the cached
/// copy lives.
pub async fn execute(ctx: &CliContext, photo_id: i64, out: Option<&Path>) -> Result<()> {
    let photo = ctx.service().get_photo(photo_id).await?;
    let Some(bytes) = ctx.service().image_for_photo(photo_id).await? else {
        bail!("Could not load image for photo {photo_id} from {}", photo.source_url);
    };

    match out {
        Some(path) => {
            tokio::fs::write(path, &bytes).await?;
            println!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let cached = ctx
                .service()
                .cache()
                .dir()
                .join(geoalbum_core::derive_cache_key(&photo.source_url));
            println!(
                "Photo {} ({} bytes) cached at {}",
                photo.id,
                bytes.len(),
                cached.display()
            );
        }
    }

    Ok(())
}
