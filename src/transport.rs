//! HTTP transport: authenticated JSON request/response against the API.

pub mod http;

pub use http::{HttpTransport, RequestOptions};
