// src/github/api.rs
//! The repository operations the context engine consumes.

use crate::core_types::{CommitRequest, RemoteFile, RepoId, RepoMetadata, RepoSummary, RepoTree};
use crate::errors::Result;

/// A credentialed client for a repository hosting API.
///
/// [`super::GitHubClient`] is the production implementation; tests substitute
/// an in-memory repository. Implementations must be shareable across threads
/// because the source and notebook passes fetch in parallel.
pub trait RepositoryApi: Send + Sync {
    /// Fetches the recursive tree listing of the configured reference.
    fn fetch_tree(&self, repo: &RepoId) -> Result<RepoTree>;

    /// Fetches a single file with its revision identifier.
    ///
    /// Returns `Ok(None)` when nothing exists at `path`.
    fn fetch_file(&self, repo: &RepoId, path: &str) -> Result<Option<RemoteFile>>;

    /// Fetches description, primary language, star count and topics.
    fn fetch_metadata(&self, repo: &RepoId) -> Result<RepoMetadata>;

    /// Lists the repositories owned by the authenticated user, most recently
    /// updated first.
    fn list_user_repos(&self) -> Result<Vec<RepoSummary>>;

    /// Creates or updates a file, conditioned on `request.existing_revision`.
    ///
    /// Returns the revision identifier of the written content. A stale or
    /// missing precondition must make the write fail, never overwrite.
    fn put_file(&self, repo: &RepoId, request: &CommitRequest) -> Result<String>;
}
