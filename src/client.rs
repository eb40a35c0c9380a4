//! Dermalytics API client.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod error_classification;
mod validation;

pub use builder::DermalyticsClientBuilder;
pub use core::DermalyticsClient;
pub use error_classification::{classify_error, extract_error_message};
