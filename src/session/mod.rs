/// Module containing access-token acquisition, caching and refresh
pub mod auth;

pub use auth::{AccessToken, BizAuth};
