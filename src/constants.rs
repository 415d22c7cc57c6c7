// src/constants.rs

/// Maximum number of tree entries rendered into the file tree listing.
pub const TREE_DISPLAY_CAP: usize = 120;

/// Manifests fetched for tech-stack inference.
pub const MAX_MANIFESTS: usize = 2;

/// Per-file character cap for manifest snippets.
pub const MANIFEST_CHAR_CAP: usize = 1500;

/// Source files sampled per repository.
pub const MAX_SOURCE_FILES: usize = 5;

/// Per-file character cap for source snippets. Small, since several files are sampled.
pub const SOURCE_CHAR_CAP: usize = 600;

/// Notebooks sampled per repository.
pub const MAX_NOTEBOOKS: usize = 3;

/// Cumulative extraction cap for a single notebook (also the notebook snippet cap).
pub const NOTEBOOK_CHAR_CAP: usize = 3500;

/// A code cell must have more than this many characters left after comment
/// stripping to be emitted.
pub const NOTEBOOK_MIN_CODE_CHARS: usize = 15;

/// Git reference used when none is configured.
pub const DEFAULT_GIT_REF: &str = "HEAD";

/// Default GitHub REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// File name of the generated document.
pub const README_FILE_NAME: &str = "README.md";

/// Commit message for a newly created document.
pub const COMMIT_MESSAGE_CREATE: &str = "docs: add README via readmeify";

/// Commit message for an update of an existing document.
pub const COMMIT_MESSAGE_UPDATE: &str = "docs: update README via readmeify";

/// Rendered in place of the content sections when nothing could be sampled.
pub const NO_CONTENT_PLACEHOLDER: &str = "(no file content available)";

/// Annotation appended to notebook snippet labels.
pub const NOTEBOOK_LABEL_SUFFIX: &str = " (notebook)";

/// `User-Agent` sent with every API request.
pub const DEFAULT_USER_AGENT: &str = concat!("readmeify/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout imposed by the HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size of the `repos` listing (first page only, most recently updated first).
pub const USER_REPOS_PAGE_SIZE: usize = 30;
