#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultFlickrClient is meant to be
// used through the core ports, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultFlickrClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FlickrClientConfig};

// Construction errors
pub use error::FlickrError;
