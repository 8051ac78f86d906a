//! Destination corpus
//!
//! Records are loaded once, never mutated, and addressed by their position
//! in the store. Position order decides ranking ties.

pub mod record;
pub mod store;

pub use record::{Destination, Record};
pub use store::RecordStore;
