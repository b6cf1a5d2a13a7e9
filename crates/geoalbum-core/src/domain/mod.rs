//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, network).
//!
//! # Structure
//!
//! - `location` - Pins placed by the user (`Location`, `PageCursor`)
//! - `photo` - Photo records owned by a location (`Photo`, `NewPhoto`)

mod location;
mod photo;

pub use location::{Coordinate, Location, PageCursor};
pub use photo::{NewPhoto, Photo};
