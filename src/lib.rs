//! quakeplot library
//!
//! Fetches the USGS earthquake summary feeds for the past day, week and month,
//! caches them on disk, and renders each as an interactive world map.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;
pub mod store;

pub use error::{Error, ErrorKind, Result};
