//! Snapshot storage layer for fintrack
//!
//! Reads the JSON snapshot exported from the remote service and normalizes
//! it into typed models. Writes are limited to settings files.

pub mod file_io;
pub mod normalize;
pub mod raw;
pub mod snapshot;

pub use raw::RawSnapshot;
pub use snapshot::Snapshot;
