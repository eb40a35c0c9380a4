//! Product analysis payloads.

use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub ingredients: Vec<&'a str>,
}

impl<'a> AnalyzeRequest<'a> {
    pub fn new(ingredients: &'a [impl AsRef<str>]) -> Self {
        Self {
            ingredients: ingredients.iter().map(|i| i.as_ref()).collect(),
        }
    }
}

/// Server verdict for a complete product formulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAnalysis {
    pub safety_status: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientAnalysis>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

/// Per-ingredient entry of a [`ProductAnalysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAnalysis {
    pub name: String,
    pub severity: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub ingredient: String,
    pub condition: String,
    pub severity: String,
    pub reason: String,
}
