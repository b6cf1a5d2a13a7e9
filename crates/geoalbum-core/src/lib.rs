#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod cache;
pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use cache::{PhotoCache, derive_cache_key};
pub use domain::{Coordinate, Location, NewPhoto, PageCursor, Photo};
pub use events::{AppEvent, EventBroadcaster, FETCH_FAILED_TOPIC};
pub use ports::{
    AppEventEmitter, CoreError, ImageFetchError, ImageFetcherPort, LocationRepository,
    NoopEmitter, PhotoRepository, PhotoSearchPort, Repos, RepositoryError, SearchItem,
    SearchOutcome, SearchRequest, SearchResult,
};
pub use services::{
    Advance, DEFAULT_PER_PAGE, PaginationController, PhotoProvisioningService,
    ProvisionedPage, ProvisioningConfig, ProvisioningError,
};

// Re-export path utilities
pub use paths::{
    DATA_DIR_ENV, PathError, data_root, database_path, database_path_in, ensure_directory,
    image_cache_dir, image_cache_dir_in,
};

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use geoalbum_db as _;
