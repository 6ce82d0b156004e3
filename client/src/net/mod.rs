//! Backend access: wire types, URL building, token decoding, HTTP client.

pub mod api;
pub mod query;
pub mod token;
pub mod types;
