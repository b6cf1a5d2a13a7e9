//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - Network ports never return transport errors across the async boundary;
//!   outcomes are tagged values

pub mod event_emitter;
pub mod image_fetcher;
pub mod location_repository;
pub mod photo_repository;
pub mod search;

use std::sync::Arc;
use thiserror::Error;

pub use event_emitter::{AppEventEmitter, NoopEmitter};
pub use image_fetcher::{ImageFetchError, ImageFetcherPort};
pub use location_repository::LocationRepository;
pub use photo_repository::PhotoRepository;
pub use search::{PhotoSearchPort, SearchItem, SearchOutcome, SearchRequest, SearchResult};

/// Container for all repository trait objects.
///
/// Lives in `geoalbum-core` so services can accept it without depending on
/// `geoalbum-db`.
///
/// ```ignore
/// let repos = geoalbum_db::CoreFactory::build_repos(pool);
/// let service = PhotoProvisioningService::new(repos, search, cache, emitter, config);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Location repository (pins and their page cursor).
    pub locations: Arc<dyn LocationRepository>,
    /// Photo repository (records owned by locations).
    pub photos: Arc<dyn PhotoRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(locations: Arc<dyn LocationRepository>, photos: Arc<dyn PhotoRepository>) -> Self {
        Self { locations, photos }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own presentation (CLI exit codes, messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Photo provisioning failed.
    #[error(transparent)]
    Provisioning(#[from] crate::services::ProvisioningError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),
}
