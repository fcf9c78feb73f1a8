//! Cache module for storing feed bodies and rendered plots on disk
//!
//! All files live in one data directory and are replaced atomically, so readers
//! only ever observe a complete previous or complete new version.

mod manager;

pub use manager::{write_atomic, CacheManager};
