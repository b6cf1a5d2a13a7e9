//! Command handlers that delegate to the provisioning service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Call `PhotoProvisioningService` methods
//!   2. Format output for the terminal
//!
//! Handlers should NOT access repositories, the cache directory or the
//! network directly. Fetch failures are reported by the caller from the
//! event stream, not by the handlers.

pub mod fetch;
pub mod image;
pub mod list;
pub mod photos;
pub mod place;
pub mod remove;
