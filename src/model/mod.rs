/// Module containing request bodies and query filters
pub mod requests;
/// Module containing typed response payloads
pub mod responses;
