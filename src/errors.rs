//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures the
//! context engine can surface. Only a handful of them reach callers: per-file
//! failures during assembly are logged and swallowed by the assembler.

use std::fmt;
use thiserror::Error;

/// The step of context assembly whose failure aborts the whole operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStep {
    /// The recursive tree listing.
    TreeListing,
    /// The repository metadata request.
    RepositoryMetadata,
}

impl fmt::Display for AssemblyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyStep::TreeListing => f.write_str("tree listing"),
            AssemblyStep::RepositoryMetadata => f.write_str("repository metadata"),
        }
    }
}

/// Application-specific errors used throughout `readmeify`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Transport Errors ---
    /// The HTTP request could not be completed (DNS, TLS, timeout, ...).
    #[error("Request to '{url}' failed: {source}")]
    Request {
        /// The URL that was requested.
        url: String,
        /// The underlying `reqwest` error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("GitHub API returned {status} for '{url}': {message}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The `message` field of the error body, or the raw body.
        message: String,
    },

    /// The API answered with a body that could not be deserialized.
    #[error("Unexpected response body from '{url}': {source}")]
    InvalidResponse {
        /// The URL that was requested.
        url: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    // --- Content Errors ---
    /// A fetched blob was not valid base64.
    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// A decoded blob was not valid UTF-8 (most likely a binary file).
    #[error("Decoded content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The contents API returned an encoding other than base64 (e.g. `none` for large files).
    #[error("Unsupported content encoding '{0}'")]
    UnsupportedEncoding(String),

    // --- Operation Errors ---
    /// Context assembly was aborted because a required step failed.
    #[error("Could not read repository: {step} failed: {source}")]
    Assembly {
        /// The step that failed.
        step: AssemblyStep,
        /// What went wrong.
        #[source]
        source: Box<Error>,
    },

    /// The write of a generated document failed for a reason other than a conflict.
    #[error("Commit to '{path}' failed: {source}")]
    Commit {
        /// The target path of the write.
        path: String,
        /// What went wrong.
        #[source]
        source: Box<Error>,
    },

    /// The file at the target path changed between the revision read and the write.
    #[error("Commit to '{path}' rejected: the file changed since {}", describe_revision(.expected))]
    Conflict {
        /// The target path of the write.
        path: String,
        /// The precondition revision the write carried, if any.
        expected: Option<String>,
    },

    // --- Input Errors ---
    /// A repository reference could not be parsed.
    #[error("Invalid repository reference: {0}")]
    InvalidRepo(String),

    /// Generic error related to invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // --- Signal Handling ---
    /// Error indicating that the operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

fn describe_revision(expected: &Option<String>) -> String {
    match expected {
        Some(sha) => format!("revision {} was read", sha),
        None => "it was found to be absent".to_string(),
    }
}

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Request { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// `true` when a commit was rejected because of a concurrent modification.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }

    /// `true` for any commit failure, conflicts included.
    pub fn is_commit_failure(&self) -> bool {
        matches!(self, Error::Commit { .. } | Error::Conflict { .. })
    }

    /// `true` when context assembly could not read the repository.
    pub fn is_assembly_failure(&self) -> bool {
        matches!(self, Error::Assembly { .. })
    }

    pub(crate) fn assembly(step: AssemblyStep, source: Error) -> Self {
        Error::Assembly {
            step,
            source: Box::new(source),
        }
    }
}
