/// Number of minutes an access token stays valid after issuance.
/// The server hands out tokens for a fixed 15 minute interval; the client
/// re-acquires lazily once this age is reached.
pub const TOKEN_VALIDITY_MINUTES: i64 = 15;
/// Default base URL of the iiko.biz API
pub const DEFAULT_BASE_URL: &str = "https://iiko.biz:9900";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Default value for the `request_timeout` query parameter expected by the
/// remote API (two minutes, in its `HH:MM:SS` notation)
pub const DEFAULT_REQUEST_TIMEOUT: &str = "00:02:00";
/// User agent string used in HTTP requests to identify this client to the iiko.biz API
pub const USER_AGENT: &str = "Rust-Iiko-Client/0.1.0";
