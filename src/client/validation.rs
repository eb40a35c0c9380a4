//! Local input checks, run before any network call.

use crate::{Error, Result};

/// Returns the trimmed key, or a validation error when nothing is left.
pub(crate) fn validate_api_key(api_key: &str) -> Result<String> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("API key is required"));
    }
    Ok(trimmed.to_string())
}

/// Returns the trimmed ingredient name.
pub(crate) fn validate_ingredient_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("Ingredient name is required"));
    }
    Ok(trimmed)
}

pub(crate) fn validate_ingredients<S: AsRef<str>>(ingredients: &[S]) -> Result<()> {
    if ingredients.is_empty() {
        return Err(Error::validation(
            "Ingredients array is required and must not be empty",
        ));
    }
    Ok(())
}
