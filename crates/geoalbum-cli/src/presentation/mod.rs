//! Terminal presentation helpers shared by handlers.

pub mod alerts;
pub mod tables;

pub use alerts::{FETCH_FAILED_MESSAGE, report_fetch_failures};
pub use tables::{format_cursor, print_separator, truncate_string};
