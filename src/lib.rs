//! # iiko-client
//!
//! Async client library for the iiko.biz restaurant and delivery API.
//!
//! The library manages the bearer-token lifecycle transparently: the first
//! request acquires a token from the configured login/password pair, later
//! requests reuse it, and any request made fifteen minutes or more after the
//! token was issued re-acquires it first. Endpoint wrappers are grouped into
//! services (organizations, orders, loyalty, settings, geography, reports,
//! mobile) reachable from a single [`client::BizClient`] facade.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use iiko_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     setup_logger();
//!
//!     // Reads IIKO_LOGIN, IIKO_PASSWORD and IIKO_ORGANIZATION from the
//!     // environment or a .env file
//!     let client = BizClient::new(Config::new());
//!
//!     let organizations = client.organizations().list().await?;
//!     for org in &organizations {
//!         println!("{} {:?}", org.id, org.name);
//!     }
//!
//!     let couriers = client.settings().couriers().await?;
//!     println!("{} couriers", couriers.users.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every operation returns `Result<_, AppError>`. Failures are surfaced
//! immediately; the library never retries, rate-limits or caches responses.

pub mod application;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod prelude;
pub mod session;
pub mod transport;
pub mod utils;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
pub fn version() -> &'static str {
    VERSION
}
