//! The `readmeify` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `readmeify` library.
//!
//! # Example
//!
//! ```
//! use readmeify::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().max_source_files(3).build()?;
//! let token = CancellationToken::new();
//! assert!(!token.is_cancelled());
//! assert_eq!(readme_path(Some("docs")), "docs/README.md");
//! assert_eq!(config.classifier_for(&RepoId::new("octo", "app")).classify("src/lib.rs"), PathCategory::Source);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{
    CommitOutcome, ContentSnippet, RepoId, RepositoryContext, TreeEntry,
};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{classify_path, PathCategory, PathClassifier};
pub use crate::github::{parse_repo_spec, Credentials, GitHubClient, RepoSpec, RepositoryApi};
pub use crate::output::render_context_block;
pub use crate::processing::{extract_notebook, Extraction, NotebookOptions};
pub use crate::{assemble, assemble_context, commit, commit_document, readme_path};
