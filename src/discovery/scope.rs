// src/discovery/scope.rs

use crate::core_types::{ScopedEntry, ScopedTree, TreeEntry};
use log::debug;
use serde::Serialize;

/// Normalizes a user-supplied subdirectory.
///
/// Leading/trailing slashes are removed; an empty result means "whole repository".
///
/// # Examples
/// ```
/// use readmeify::discovery::normalize_subdir;
///
/// assert_eq!(normalize_subdir(Some("/lib/")).as_deref(), Some("lib"));
/// assert_eq!(normalize_subdir(Some("/")), None);
/// assert_eq!(normalize_subdir(None), None);
/// ```
pub fn normalize_subdir(subdir: Option<&str>) -> Option<String> {
    subdir
        .map(|s| s.trim().trim_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Joins a file name onto an optional scope prefix.
pub fn join_scoped(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) => format!("{}/{}", p, name),
        None => name.to_string(),
    }
}

/// Narrows a tree listing to the blobs under `subdir`, capped at `cap` entries.
///
/// Without a subdirectory the first `cap` blobs are returned with their paths
/// unchanged. With one, only paths starting with `subdir + "/"` are kept and
/// the prefix is stripped for display. Tree order is preserved; it is the
/// priority signal for every later "take first K" selection.
///
/// # Examples
/// ```
/// use readmeify::core_types::TreeEntry;
/// use readmeify::discovery::scope;
///
/// let tree = vec![
///     TreeEntry::blob("README.md"),
///     TreeEntry::tree("lib"),
///     TreeEntry::blob("lib/index.js"),
///     TreeEntry::blob("library.txt"),
/// ];
/// let scoped = scope(&tree, Some("lib"), 120);
/// assert_eq!(scoped.listing(), "index.js");
/// assert_eq!(scoped.entries()[0].repo_path, "lib/index.js");
/// ```
pub fn scope(tree: &[TreeEntry], subdir: Option<&str>, cap: usize) -> ScopedTree {
    let prefix = normalize_subdir(subdir);
    let entries: Vec<ScopedEntry> = match prefix.as_deref() {
        None => tree
            .iter()
            .filter(|e| e.is_blob())
            .take(cap)
            .map(|e| ScopedEntry {
                repo_path: e.path.clone(),
                display_path: e.path.clone(),
            })
            .collect(),
        Some(p) => {
            let dir_prefix = format!("{}/", p);
            tree.iter()
                .filter(|e| e.is_blob())
                .filter_map(|e| {
                    e.path.strip_prefix(&dir_prefix).map(|rel| ScopedEntry {
                        repo_path: e.path.clone(),
                        display_path: rel.to_string(),
                    })
                })
                .take(cap)
                .collect()
        }
    };
    debug!(
        "Scoped tree to {:?}: {} entries (cap {})",
        prefix,
        entries.len(),
        cap
    );
    ScopedTree { prefix, entries }
}

/// A directory of the repository, as offered for folder selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub path: String,
    /// Number of parent directories (0 for top-level folders).
    pub depth: usize,
}

/// Lists the directories of a tree listing in tree order.
pub fn list_directories(tree: &[TreeEntry]) -> Vec<DirectoryEntry> {
    tree.iter()
        .filter(|e| !e.is_blob())
        .map(|e| DirectoryEntry {
            path: e.path.clone(),
            depth: e.path.matches('/').count(),
        })
        .collect()
}
