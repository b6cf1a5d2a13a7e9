//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use geoalbum_core::{DATA_DIR_ENV, DEFAULT_PER_PAGE};

use crate::commands::Commands;

/// Command-line interface for the geo-tagged photo album.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "geoalbum")]
#[command(about = "Pin locations and browse the photos taken around them")]
#[command(version)]
pub struct Cli {
    /// Directory holding the database and the image cache
    #[arg(long = "data-dir", env = DATA_DIR_ENV, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Flickr API key
    #[arg(long = "api-key", env = "FLICKR_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Override the Flickr REST endpoint
    #[arg(long = "base-url", env = "FLICKR_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Photos requested per page
    #[arg(
        long = "per-page",
        env = "GEOALBUM_PER_PAGE",
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..=500),
        global = true
    )]
    pub per_page: u32,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
