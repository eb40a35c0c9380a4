//! Request and response payloads of the Dermalytics API.
//!
//! All records are plain values. Severities and safety statuses are kept as
//! strings because their vocabulary is owned by the server.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`Ingredient`] | `GET /ingredients/{name}` |
//! | [`AnalyzeRequest`] | `POST /analyze` (body) |
//! | [`ProductAnalysis`] | `POST /analyze` (response) |

pub mod analysis;
pub mod ingredient;

pub use analysis::{AnalyzeRequest, IngredientAnalysis, ProductAnalysis, Warning};
pub use ingredient::{Category, ConditionSafety, Ingredient};
