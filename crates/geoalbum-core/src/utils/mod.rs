//! Small shared helpers.

pub mod keyed_lock;

pub use keyed_lock::KeyedLocks;
