/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing service implementations
pub mod services;
