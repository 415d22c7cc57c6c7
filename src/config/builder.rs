// src/config/builder.rs

use super::{
    parsing::{compile_regex_vec, non_empty},
    validation::validate_limits,
    default_engine_repository, ApiConfig, Config, Limits,
};
use crate::core_types::RepoId;
use crate::cli::GlobalArgs;
use crate::errors::{Error, Result};
use crate::github::Credentials;
use std::time::Duration;

/// A builder for creating a `Config` instance programmatically.
///
/// Every setter is optional; anything left unset falls back to the defaults
/// in [`crate::constants`].
///
/// # Examples
/// ```
/// use readmeify::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .max_source_files(3)
///     .exclude_path_regex(vec!["^legacy/".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(config.limits.max_source_files, 3);
/// assert_eq!(config.limits.max_manifests, 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    api_base_url: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
    git_ref: Option<String>,
    exclude_path_regex: Option<Vec<String>>,
    tree_display_cap: Option<usize>,
    max_manifests: Option<usize>,
    manifest_char_cap: Option<usize>,
    max_source_files: Option<usize>,
    source_char_cap: Option<usize>,
    max_notebooks: Option<usize>,
    notebook_char_cap: Option<usize>,
    notebook_min_code_chars: Option<usize>,
    engine_repository: Option<RepoId>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` from the global command-line arguments.
    pub fn from_cli(args: &GlobalArgs) -> Self {
        Self {
            api_base_url: Some(args.api_url.clone()),
            token: args.token.clone(),
            timeout_secs: Some(args.timeout),
            git_ref: args.git_ref.clone(),
            exclude_path_regex: args.exclude_path_regex.clone(),
            ..Self::default()
        }
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the access token sent as a bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Per-request timeout in seconds; `0` disables the timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Branch, tag or commit to read from and commit to.
    pub fn git_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = Some(git_ref.into());
        self
    }

    /// Sets the git ref only when none was set before.
    pub fn git_ref_if_unset(mut self, git_ref: Option<String>) -> Self {
        if self.git_ref.is_none() {
            self.git_ref = git_ref;
        }
        self
    }

    /// Extra regexes; matching repository paths are never sampled.
    pub fn exclude_path_regex(mut self, patterns: Vec<String>) -> Self {
        self.exclude_path_regex = Some(patterns);
        self
    }

    pub fn tree_display_cap(mut self, cap: usize) -> Self {
        self.tree_display_cap = Some(cap);
        self
    }

    pub fn max_manifests(mut self, max: usize) -> Self {
        self.max_manifests = Some(max);
        self
    }

    pub fn manifest_char_cap(mut self, cap: usize) -> Self {
        self.manifest_char_cap = Some(cap);
        self
    }

    pub fn max_source_files(mut self, max: usize) -> Self {
        self.max_source_files = Some(max);
        self
    }

    pub fn source_char_cap(mut self, cap: usize) -> Self {
        self.source_char_cap = Some(cap);
        self
    }

    pub fn max_notebooks(mut self, max: usize) -> Self {
        self.max_notebooks = Some(max);
        self
    }

    pub fn notebook_char_cap(mut self, cap: usize) -> Self {
        self.notebook_char_cap = Some(cap);
        self
    }

    pub fn notebook_min_code_chars(mut self, min: usize) -> Self {
        self.notebook_min_code_chars = Some(min);
        self
    }

    /// The repository this engine is built from; its implementation files are
    /// skipped when that repository is assembled.
    pub fn engine_repository(mut self, repo: RepoId) -> Self {
        self.engine_repository = Some(repo);
        self
    }

    /// Validates the settings and builds the final `Config`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an empty base URL, a zero cap, or a regex
    /// that does not compile.
    pub fn build(self) -> Result<Config> {
        let defaults = Limits::default();
        let limits = Limits {
            tree_display_cap: self.tree_display_cap.unwrap_or(defaults.tree_display_cap),
            max_manifests: self.max_manifests.unwrap_or(defaults.max_manifests),
            manifest_char_cap: self.manifest_char_cap.unwrap_or(defaults.manifest_char_cap),
            max_source_files: self.max_source_files.unwrap_or(defaults.max_source_files),
            source_char_cap: self.source_char_cap.unwrap_or(defaults.source_char_cap),
            max_notebooks: self.max_notebooks.unwrap_or(defaults.max_notebooks),
            notebook_char_cap: self.notebook_char_cap.unwrap_or(defaults.notebook_char_cap),
            notebook_min_code_chars: self
                .notebook_min_code_chars
                .unwrap_or(defaults.notebook_min_code_chars),
        };
        validate_limits(&limits)?;

        let default_api = ApiConfig::default();
        let base_url = match self.api_base_url {
            Some(url) => non_empty(url, "API base URL")?,
            None => default_api.base_url,
        };
        let git_ref = match self.git_ref {
            Some(r) => non_empty(r, "git ref")?,
            None => default_api.git_ref,
        };
        let credentials = self
            .token
            .filter(|t| !t.trim().is_empty())
            .map(Credentials::new)
            .or_else(Credentials::from_env);
        let timeout = match self.timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => default_api.timeout,
        };

        let api = ApiConfig {
            base_url,
            credentials,
            user_agent: self.user_agent.unwrap_or(default_api.user_agent),
            timeout,
            git_ref,
        };

        let exclude_path_regex = compile_regex_vec(self.exclude_path_regex, "exclude path")?;
        log::debug!(
            "Built configuration: ref={}, limits={:?}, {} extra skip rule(s)",
            api.git_ref,
            limits,
            exclude_path_regex.len()
        );

        Ok(Config {
            api,
            limits,
            exclude_path_regex,
            engine_repository: self.engine_repository.or_else(default_engine_repository),
        })
    }
}

impl TryFrom<&GlobalArgs> for Config {
    type Error = Error;

    fn try_from(args: &GlobalArgs) -> Result<Self> {
        ConfigBuilder::from_cli(args).build()
    }
}
