//! Integration tests with mock HTTP server

pub mod analyze;
pub mod ingredients;
