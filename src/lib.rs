//! `readmeify` is a library and command-line tool that builds a compact,
//! bounded picture of a GitHub repository for a README generator, and
//! commits the generated document back.
//!
//! The library works entirely through the hosting service's API; nothing is
//! cloned. It has two operations:
//! 1.  **Assemble**: fetch the recursive tree once, scope it to an optional
//!     subdirectory, sample up to two dependency manifests, five source files
//!     and three notebooks, and attach the repository metadata.
//! 2.  **Commit**: create or update a README with an optimistic-concurrency
//!     precondition, so a concurrent change is reported rather than overwritten.
//!
//! The API is reached through the [`github::RepositoryApi`] trait, which makes
//! every stage usable against an in-memory repository.
//!
//! # Example: Library Usage
//!
//! ```no_run
//! use readmeify::github::{Credentials, GitHubClient};
//! use readmeify::{assemble_context, output, CancellationToken, ConfigBuilder, RepoId};
//!
//! # fn main() -> readmeify::Result<()> {
//! let config = ConfigBuilder::new().token("ghp_example").build()?;
//! let client = GitHubClient::new(&config.api)?;
//! let repo = RepoId::new("octocat", "Hello-World");
//!
//! let ctx = assemble_context(&client, &repo, None, &config, &CancellationToken::new())?;
//! println!("{}", output::render_context_block(&ctx));
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod cancellation;
pub mod cli;
pub mod commit;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod github;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod signal;

// Re-export key public types for easier use as a library
pub use assemble::assemble_context;
pub use cancellation::CancellationToken;
pub use commit::{commit_document, readme_path};
pub use config::{Config, ConfigBuilder};
pub use core_types::{CommitOutcome, ContentSnippet, RepoId, RepositoryContext};
pub use errors::{Error, Result};

use crate::github::{Credentials, GitHubClient};

/// Assembles the context of `owner/repo` with default limits.
///
/// This is the one-call entry point: it builds a [`GitHubClient`] for the
/// public API with the given credentials and never cancels.
///
/// # Errors
/// See [`assemble_context`].
pub fn assemble(
    credentials: &Credentials,
    owner: &str,
    repo: &str,
    subdir: Option<&str>,
) -> Result<RepositoryContext> {
    let config = config_for(credentials)?;
    let client = GitHubClient::new(&config.api)?;
    assemble_context(
        &client,
        &RepoId::new(owner, repo),
        subdir,
        &config,
        &CancellationToken::new(),
    )
}

/// Creates or updates the README of `owner/repo` (or of `subdir`) on the
/// default branch.
///
/// # Errors
/// [`Error::Conflict`] when the README changed concurrently, otherwise
/// [`Error::Commit`].
pub fn commit(
    credentials: &Credentials,
    owner: &str,
    repo: &str,
    subdir: Option<&str>,
    content: &str,
) -> Result<CommitOutcome> {
    let config = config_for(credentials)?;
    let client = GitHubClient::new(&config.api)?;
    commit_document(
        &client,
        &RepoId::new(owner, repo),
        &readme_path(subdir),
        content,
        config.api.commit_branch(),
    )
}

fn config_for(credentials: &Credentials) -> Result<Config> {
    let mut config = ConfigBuilder::new().build()?;
    config.api.credentials = Some(credentials.clone());
    Ok(config)
}
