// src/cli.rs

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Assembles a compact, bounded context of a GitHub repository for README
/// generation, and commits generated documents back.
///
/// readmeify reads a repository through the GitHub REST API, samples its file
/// tree, dependency manifests, a handful of source files and notebook cells,
/// and prints the result as text or JSON. Nothing is cloned.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Access token used as a bearer token.
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API (for GitHub Enterprise).
    #[arg(long, global = true, value_name = "URL", default_value = crate::constants::DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Branch, tag or commit to read from and commit to. Defaults to the
    /// ref embedded in the repository URL, then the default branch.
    #[arg(long = "ref", global = true, value_name = "BRANCH_OR_TAG")]
    pub git_ref: Option<String>,

    /// Per-request timeout in seconds (0 disables it).
    #[arg(long, global = true, value_name = "SECS", default_value_t = crate::constants::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Never sample files whose repository path matches any of these regexes (repeatable).
    #[arg(short = 'X', long = "exclude-regex", global = true, value_name = "REGEX", num_args = 1..)]
    pub exclude_path_regex: Option<Vec<String>>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Assemble the repository context and print it.
    Context {
        /// Repository: `owner/repo`, a github.com URL, or a `/tree/<ref>/<path>` URL.
        repo: String,

        /// Scope the context to this subdirectory (overrides a path in the URL).
        #[arg(short, long, value_name = "PATH")]
        subdir: Option<String>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the repositories owned by the authenticated user.
    Repos {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the directories of the repository, for picking a scope.
    Folders {
        /// Repository: `owner/repo` or a github.com URL.
        repo: String,
    },

    /// Create or update README.md from a local file.
    Commit {
        /// Repository: `owner/repo` or a github.com URL.
        repo: String,

        /// Local file holding the document to commit.
        #[arg(short, long, value_name = "PATH")]
        file: std::path::PathBuf,

        /// Commit `<PATH>/README.md` instead of the root README.md.
        #[arg(short, long, value_name = "PATH")]
        subdir: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The plain-text context block.
    Text,
    /// The command's data as JSON.
    Json,
}
