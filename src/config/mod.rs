//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates the settings for the API client, the sampling
//! budgets, and extra skip rules, making them available to the rest of the
//! application in a structured and type-safe manner.

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_GIT_REF, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MANIFEST_CHAR_CAP, MAX_MANIFESTS, MAX_NOTEBOOKS, MAX_SOURCE_FILES, NOTEBOOK_CHAR_CAP,
    NOTEBOOK_MIN_CODE_CHARS, SOURCE_CHAR_CAP, TREE_DISPLAY_CAP,
};
use crate::core_types::RepoId;
use crate::filtering::PathClassifier;
use crate::github::{parse_repo_spec, Credentials};
use crate::processing::NotebookOptions;
use regex::Regex;
use std::time::Duration;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod validation;

/// Settings for the HTTP collaborator.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST API (e.g. `https://api.github.com`).
    pub base_url: String,
    /// Access token; `None` means anonymous requests.
    pub credentials: Option<Credentials>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Per-request timeout. `None` disables it.
    pub timeout: Option<Duration>,
    /// Branch, tag or commit to read from (`HEAD` for the default branch).
    pub git_ref: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            git_ref: DEFAULT_GIT_REF.to_string(),
        }
    }
}

impl ApiConfig {
    /// The branch a commit should target, `None` for the default branch.
    pub fn commit_branch(&self) -> Option<&str> {
        (self.git_ref != DEFAULT_GIT_REF).then_some(self.git_ref.as_str())
    }
}

/// Size budgets enforced while assembling a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum entries in the file tree listing.
    pub tree_display_cap: usize,
    pub max_manifests: usize,
    pub manifest_char_cap: usize,
    pub max_source_files: usize,
    pub source_char_cap: usize,
    pub max_notebooks: usize,
    /// Extraction cap and snippet cap for notebooks.
    pub notebook_char_cap: usize,
    /// Minimum comment-stripped length for a notebook code cell to be kept.
    pub notebook_min_code_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            tree_display_cap: TREE_DISPLAY_CAP,
            max_manifests: MAX_MANIFESTS,
            manifest_char_cap: MANIFEST_CHAR_CAP,
            max_source_files: MAX_SOURCE_FILES,
            source_char_cap: SOURCE_CHAR_CAP,
            max_notebooks: MAX_NOTEBOOKS,
            notebook_char_cap: NOTEBOOK_CHAR_CAP,
            notebook_min_code_chars: NOTEBOOK_MIN_CODE_CHARS,
        }
    }
}

impl Limits {
    pub fn notebook_options(&self) -> NotebookOptions {
        NotebookOptions {
            max_chars: self.notebook_char_cap,
            min_code_chars: self.notebook_min_code_chars,
        }
    }
}

/// The fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub limits: Limits,
    /// Extra skip rules matched against full repository paths.
    pub exclude_path_regex: Vec<Regex>,
    /// The repository hosting this engine. Its own implementation files are
    /// left out when it describes itself.
    pub engine_repository: Option<RepoId>,
}

impl Config {
    /// A classifier for sampling `repo`, carrying the configured extra skip rules.
    pub fn classifier_for(&self, repo: &RepoId) -> PathClassifier {
        let own = self.engine_repository.as_ref().is_some_and(|engine| engine == repo);
        PathClassifier::new(self.exclude_path_regex.clone()).skip_engine_paths(own)
    }
}

/// The package's `repository` field, when it names a GitHub repository.
pub(crate) fn default_engine_repository() -> Option<RepoId> {
    let url = env!("CARGO_PKG_REPOSITORY");
    if url.is_empty() {
        return None;
    }
    parse_repo_spec(url).ok().map(|spec| spec.repo)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            limits: Limits::default(),
            exclude_path_regex: Vec::new(),
            engine_repository: default_engine_repository(),
        }
    }
}
