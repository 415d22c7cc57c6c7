//! Writes a generated document back to the repository.
//!
//! The write carries the revision read immediately before it. If the file
//! changed in between, the hosting service refuses the write and the caller
//! gets [`Error::Conflict`]; nothing is retried or overwritten.

use crate::constants::{COMMIT_MESSAGE_CREATE, COMMIT_MESSAGE_UPDATE, README_FILE_NAME};
use crate::core_types::{CommitOutcome, CommitRequest, RepoId};
use crate::discovery::{join_scoped, normalize_subdir};
use crate::errors::{Error, Result};
use crate::github::RepositoryApi;
use log::{debug, info};

/// Target path of the generated document for an optional scope.
///
/// ```
/// use readmeify::commit::readme_path;
///
/// assert_eq!(readme_path(None), "README.md");
/// assert_eq!(readme_path(Some("/packages/api/")), "packages/api/README.md");
/// ```
pub fn readme_path(subdir: Option<&str>) -> String {
    join_scoped(normalize_subdir(subdir).as_deref(), README_FILE_NAME)
}

/// Creates or updates `target_path` with `content`.
///
/// Reads the current revision first. A missing file yields a create with no
/// precondition; an existing one yields an update conditioned on its revision.
///
/// # Errors
/// - [`Error::Config`] when `content` is empty or whitespace only. Nothing is
///   read or written.
/// - [`Error::Conflict`] when the file changed between the read and the write.
/// - [`Error::Commit`] for any other read or write failure.
#[tracing::instrument(skip(api, repo, content), fields(repo = %repo, bytes = content.len()))]
pub fn commit_document(
    api: &dyn RepositoryApi,
    repo: &RepoId,
    target_path: &str,
    content: &str,
    branch: Option<&str>,
) -> Result<CommitOutcome> {
    if content.trim().is_empty() {
        return Err(Error::Config(format!(
            "refusing to commit an empty document to '{}'",
            target_path
        )));
    }

    let existing_revision = api
        .fetch_file(repo, target_path)
        .map_err(|e| commit_error(target_path, e))?
        .map(|file| file.sha);
    debug!(
        "Current revision of '{}': {}",
        target_path,
        existing_revision.as_deref().unwrap_or("<absent>")
    );

    let message = if existing_revision.is_some() {
        COMMIT_MESSAGE_UPDATE
    } else {
        COMMIT_MESSAGE_CREATE
    };
    let request = CommitRequest {
        target_path: target_path.to_string(),
        content: content.to_string(),
        message: message.to_string(),
        existing_revision,
        branch: branch.map(str::to_string),
    };

    let revision = api
        .put_file(repo, &request)
        .map_err(|e| classify_write_error(&request, e))?;

    let outcome = match request.existing_revision {
        Some(previous_revision) => CommitOutcome::Updated {
            path: request.target_path,
            previous_revision,
            revision,
        },
        None => CommitOutcome::Created {
            path: request.target_path,
            revision,
        },
    };
    info!(
        "Committed {} to {} at revision {}",
        outcome.path(),
        repo,
        outcome.revision()
    );
    Ok(outcome)
}

/// 409 means the precondition was stale. 422 without a precondition means a
/// file appeared after the read found none.
fn classify_write_error(request: &CommitRequest, error: Error) -> Error {
    match error.status() {
        Some(409) => conflict(request),
        Some(422) if !request.is_update() => conflict(request),
        _ => commit_error(&request.target_path, error),
    }
}

fn conflict(request: &CommitRequest) -> Error {
    Error::Conflict {
        path: request.target_path.clone(),
        expected: request.existing_revision.clone(),
    }
}

fn commit_error(path: &str, source: Error) -> Error {
    Error::Commit {
        path: path.to_string(),
        source: Box::new(source),
    }
}
