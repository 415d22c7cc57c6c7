//! Narrows a repository tree listing to the part a request is about.
//!
//! The scoper filters a full recursive listing down to a subdirectory (or the
//! whole repository), relabels paths relative to that scope, and caps the
//! result for display. It also lists directories for folder selection.

mod scope;

pub use scope::{join_scoped, list_directories, normalize_subdir, scope, DirectoryEntry};
