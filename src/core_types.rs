//! Defines core data structures used throughout the assembly pipeline.
//!
//! A tree listing (`TreeEntry`) is narrowed to a `ScopedTree`, sampled into
//! `ContentSnippet`s, and bundled into a read-only `RepositoryContext`. A
//! `CommitRequest` carries a generated document back to the repository.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Identifies a repository on the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    /// The user or organisation owning the repository.
    pub owner: String,
    /// The repository name.
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A file.
    Blob,
    /// A directory.
    Tree,
}

/// One entry of a recursive tree listing.
///
/// # Examples
///
/// ```
/// use readmeify::core_types::{EntryKind, TreeEntry};
///
/// let entry = TreeEntry::blob("src/main.rs");
/// assert_eq!(entry.kind, EntryKind::Blob);
/// assert_eq!(entry.path, "src/main.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    /// Repository-relative, forward-slash separated path.
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn blob(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
        }
    }

    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
        }
    }

    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}

/// A recursive tree listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoTree {
    pub entries: Vec<TreeEntry>,
    /// The service stopped listing early; absent paths may still exist.
    pub truncated: bool,
}

impl RepoTree {
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Self {
            entries,
            truncated: false,
        }
    }
}

/// A blob of the scoped tree, carrying both its repository path and its display path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopedEntry {
    /// The path as it appears in the repository; used for fetching and classification.
    pub repo_path: String,
    /// The path relative to the scope prefix; used for display and labels.
    pub display_path: String,
}

/// A tree narrowed to a scope prefix and capped at a display limit.
///
/// Entries keep the original tree order. Construction is only possible through
/// [`crate::discovery::scope`], which enforces the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopedTree {
    pub(crate) prefix: Option<String>,
    pub(crate) entries: Vec<ScopedEntry>,
}

impl ScopedTree {
    /// The normalised subdirectory this tree is scoped to, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn entries(&self) -> &[ScopedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the display paths one per line.
    pub fn listing(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.display_path.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A sampled, already-truncated piece of file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSnippet {
    /// Display label: scope-relative path (or original path), possibly annotated `(notebook)`.
    pub label: String,
    /// Truncated text; never longer than the cap of its category.
    pub text: String,
    /// Size of the source blob in bytes, before truncation.
    pub source_size_bytes: u64,
}

/// Repository metadata as reported by the hosting service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoMetadata {
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub topics: Vec<String>,
}

/// One repository owned by the authenticated user, as shown by `repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    /// Last update timestamp as reported by the service (RFC 3339).
    pub updated_at: String,
    pub private: bool,
}

/// The assembled context handed to the text generator. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryContext {
    pub name: String,
    pub description: String,
    pub primary_language: String,
    pub star_count: u64,
    pub topics: BTreeSet<String>,
    /// The scope prefix the context was built for, if any.
    pub subdir: Option<String>,
    pub file_tree_listing: String,
    pub config_snippets: Vec<ContentSnippet>,
    pub source_snippets: Vec<ContentSnippet>,
    pub notebook_snippets: Vec<ContentSnippet>,
}

/// A file as returned by the contents endpoint, still transport-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub path: String,
    /// Opaque revision identifier of the current content.
    pub sha: String,
    pub size: u64,
    /// Transport encoding (normally `base64`).
    pub encoding: String,
    pub content: String,
}

/// A write of a generated document.
///
/// `existing_revision` is set only when a prior read found a file at
/// `target_path`; its presence is what makes the write an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub target_path: String,
    pub content: String,
    pub message: String,
    pub existing_revision: Option<String>,
    /// Branch to commit to; `None` means the default branch.
    pub branch: Option<String>,
}

impl CommitRequest {
    pub fn is_update(&self) -> bool {
        self.existing_revision.is_some()
    }
}

/// What a successful commit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// No file existed; one was created.
    Created { path: String, revision: String },
    /// An existing file at `previous_revision` was replaced.
    Updated {
        path: String,
        previous_revision: String,
        revision: String,
    },
}

impl CommitOutcome {
    pub fn path(&self) -> &str {
        match self {
            CommitOutcome::Created { path, .. } | CommitOutcome::Updated { path, .. } => path,
        }
    }

    /// Revision of the newly written content.
    pub fn revision(&self) -> &str {
        match self {
            CommitOutcome::Created { revision, .. } | CommitOutcome::Updated { revision, .. } => {
                revision
            }
        }
    }
}
