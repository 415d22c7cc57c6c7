// src/config/validation.rs

use super::Limits;
use crate::errors::{Error, Result};

/// Validates the sampling budgets: every cap must be positive.
///
/// `notebook_min_code_chars` may be zero (keep every non-empty code cell).
pub(super) fn validate_limits(limits: &Limits) -> Result<()> {
    let caps = [
        ("tree_display_cap", limits.tree_display_cap),
        ("max_manifests", limits.max_manifests),
        ("manifest_char_cap", limits.manifest_char_cap),
        ("max_source_files", limits.max_source_files),
        ("source_char_cap", limits.source_char_cap),
        ("max_notebooks", limits.max_notebooks),
        ("notebook_char_cap", limits.notebook_char_cap),
    ];
    if let Some((name, _)) = caps.iter().find(|(_, value)| *value == 0) {
        return Err(Error::Config(format!("{} must be greater than zero", name)));
    }
    Ok(())
}
