/// Module containing environment variable helpers for configuration
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
