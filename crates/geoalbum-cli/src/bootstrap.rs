//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Database pool and repositories (via geoalbum-db)
//! - Flickr search and image fetching (via geoalbum-flickr)
//! - Photo cache, event broadcaster and provisioning service (via geoalbum-core)
//!
//! Command handlers receive the composed `CliContext` and delegate to the service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use geoalbum_core::{
    DEFAULT_PER_PAGE, EventBroadcaster, ImageFetcherPort, PhotoCache, PhotoProvisioningService,
    ProvisioningConfig, data_root, database_path_in, ensure_directory, image_cache_dir_in,
};
use geoalbum_db::{CoreFactory, setup_database};
use geoalbum_flickr::{DefaultFlickrClient, FlickrClientConfig};
use tracing::{debug, warn};

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data directory override; `None` resolves the platform default.
    pub data_dir: Option<PathBuf>,
    /// Flickr API key.
    pub api_key: Option<String>,
    /// Flickr REST endpoint override.
    pub base_url: Option<String>,
    /// Photos requested per page.
    pub per_page: u32,
}

impl CliConfig {
    /// Build the config from parsed arguments (flags and environment).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            api_key: cli.api_key.clone(),
            base_url: cli.base_url.clone(),
            per_page: cli.per_page,
        }
    }

    /// Config with default paths and page size, and no API key.
    pub fn with_defaults() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            ..Self::default()
        }
    }

    fn flickr_config(&self) -> FlickrClientConfig {
        let mut config = FlickrClientConfig::new();
        match &self.api_key {
            Some(key) => config = config.with_api_key(key.clone()),
            None => warn!("FLICKR_API_KEY is not set; photo searches will be rejected"),
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        config
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The provisioning service, the only API handlers use.
    pub service: PhotoProvisioningService,
    /// Event fan-out; handlers subscribe to observe fetch failures.
    pub events: EventBroadcaster,
    /// Resolved data directory.
    pub data_dir: PathBuf,
}

impl CliContext {
    /// Access the provisioning service.
    pub fn service(&self) -> &PhotoProvisioningService {
        &self.service
    }

    /// Access the event broadcaster.
    pub fn events(&self) -> &EventBroadcaster {
        &self.events
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Resolves the data directory
/// 2. Creates the database pool and repositories
/// 3. Creates the Flickr client, used as both search and image port
/// 4. Creates the photo cache over `<data_dir>/images`
/// 5. Assembles the provisioning service with the event broadcaster
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Data directory
    let data_dir = match &config.data_dir {
        Some(dir) => {
            ensure_directory(dir)?;
            dir.clone()
        }
        None => data_root()?,
    };
    debug!(data_dir = %data_dir.display(), "Resolved data directory");

    // 2. Database
    let pool = setup_database(&database_path_in(&data_dir)).await?;
    let repos = CoreFactory::build_repos(pool);

    // 3. Remote search and image download
    let flickr = Arc::new(DefaultFlickrClient::new(&config.flickr_config())?);
    let fetcher: Arc<dyn ImageFetcherPort> = flickr.clone();

    // 4. Photo cache
    let cache = Arc::new(PhotoCache::new(image_cache_dir_in(&data_dir)?, fetcher));

    // 5. Service
    let events = EventBroadcaster::new();
    let service = PhotoProvisioningService::new(
        repos,
        flickr,
        cache,
        Arc::new(events.clone()),
        ProvisioningConfig::default().with_per_page(config.per_page),
    );

    Ok(CliContext {
        service,
        events,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bootstrap_creates_data_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("album");
        let config = CliConfig {
            data_dir: Some(root.clone()),
            api_key: Some("k".to_string()),
            ..CliConfig::with_defaults()
        };

        let ctx = bootstrap(config).await.unwrap();

        assert_eq!(ctx.data_dir, root);
        assert!(root.join("geoalbum.db").exists());
        assert!(root.join("images").is_dir());
        assert!(ctx.service().list_locations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_accepts_malformed_base_url() {
        let temp = TempDir::new().unwrap();
        let config = CliConfig {
            data_dir: Some(temp.path().to_path_buf()),
            base_url: Some("not a url".to_string()),
            ..CliConfig::with_defaults()
        };

        assert!(bootstrap(config).await.is_ok());
    }
}
