//! # dermalytics
//!
//! Async Rust client for the Dermalytics cosmetic-ingredient safety API.
//!
//! ## Overview
//!
//! The client authenticates every request with a bearer key, exchanges JSON
//! with the API and maps failures onto a small typed error taxonomy. All
//! safety computation happens server-side; this crate only validates input
//! and translates errors.
//!
//! - **Ingredient lookup**: [`DermalyticsClient::get_ingredient`]
//! - **Product analysis**: [`DermalyticsClient::analyze`]
//! - **Typed errors**: every failure is an [`Error`] of one [`ErrorKind`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dermalytics::{ClientConfig, DermalyticsClient};
//!
//! #[tokio::main]
//! async fn main() -> dermalytics::Result<()> {
//!     let client = DermalyticsClient::new(ClientConfig::new("your-api-key"))?;
//!
//!     let ingredient = client.get_ingredient("Niacinamide").await?;
//!     println!("{}: {}", ingredient.name, ingredient.severity);
//!
//!     let analysis = client.analyze(&["Aqua", "Glycerin"]).await?;
//!     println!("status: {}", analysis.safety_status);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use dermalytics::{DermalyticsClient, ErrorKind};
//!
//! # async fn run(client: DermalyticsClient) {
//! match client.get_ingredient("unobtainium").await {
//!     Ok(ingredient) => println!("{:?}", ingredient),
//!     Err(e) if e.kind() == ErrorKind::NotFound => println!("no such ingredient"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # }
//! ```
//!
//! ## Logging
//!
//! Requests and failures are reported through [`tracing`]; install any
//! subscriber to see them. The API key is never logged.

pub mod client;
pub mod config;
pub mod error_kind;
pub mod transport;
pub mod types;

pub use client::{DermalyticsClient, DermalyticsClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error_kind::ErrorKind;
pub use transport::RequestOptions;
pub use types::{
    AnalyzeRequest, Category, ConditionSafety, Ingredient, IngredientAnalysis, ProductAnalysis,
    Warning,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
