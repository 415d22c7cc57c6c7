// src/config/parsing.rs

use crate::errors::{Error, Result};
use regex::Regex;

/// Compiles a vector of pattern strings into a vector of Regex objects.
pub(super) fn compile_regex_vec(patterns: Option<Vec<String>>, name: &str) -> Result<Vec<Regex>> {
    patterns
        .unwrap_or_default()
        .into_iter()
        .map(|p| {
            Regex::new(&p)
                .map_err(|e| Error::Config(format!("Invalid {} regex '{}': {}", name, p, e)))
        })
        .collect()
}

/// Trims a required string setting, rejecting blank values.
pub(super) fn non_empty(value: String, name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Config(format!("{} must not be empty", name)));
    }
    Ok(trimmed.to_string())
}
