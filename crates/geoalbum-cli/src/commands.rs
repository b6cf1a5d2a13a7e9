//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop a pin at a coordinate and fetch its first page of photos
    Place {
        /// Latitude in degrees, -90 to 90
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        /// Longitude in degrees, -180 to 180
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// List all pins
    List,

    /// List the photos of a pin
    Photos {
        /// Location ID
        location: i64,
    },

    /// Refetch the current page of a pin
    Fetch {
        /// Location ID
        location: i64,
    },

    /// Replace a pin's photos with its next page
    Next {
        /// Location ID
        location: i64,
    },

    /// Load a photo's image through the cache
    Image {
        /// Photo ID
        photo: i64,
        /// Write the image bytes to this file
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },

    /// Delete a single photo
    RemovePhoto {
        /// Photo ID
        photo: i64,
    },

    /// Delete a pin and all of its photos
    RemoveLocation {
        /// Location ID
        location: i64,
    },
}
