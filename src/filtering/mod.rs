// src/filtering/mod.rs

//! Provides standalone functions for path classification.
//!
//! These functions are used by the assembler to decide, from a repository
//! path alone, whether an entry is a manifest, a notebook, a source file, or
//! noise. They are exposed publicly to allow for their use in other contexts.

mod classify;
mod extension;
mod lockfile;
mod manifest;

pub use classify::{classify_path, PathCategory, PathClassifier};
pub use extension::{file_extension, is_source_extension, NOTEBOOK_EXTENSION, SOURCE_EXTENSIONS};
pub use lockfile::is_lockfile;
pub use manifest::{is_manifest_name, MANIFEST_CANDIDATES};
