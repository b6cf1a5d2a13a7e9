//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod error;
mod pagination;
mod provisioning;

#[cfg(test)]
mod test_support;

pub use error::ProvisioningError;
pub use pagination::{Advance, PaginationController, ProvisionedPage};
pub use provisioning::{DEFAULT_PER_PAGE, PhotoProvisioningService, ProvisioningConfig};
