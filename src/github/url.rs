//! Handles parsing of repository references (`owner/repo` and GitHub URLs).

use crate::core_types::RepoId;
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// A parsed repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub repo: RepoId,
    /// Branch or tag named by a `/tree/<ref>/` URL.
    pub git_ref: Option<String>,
    /// Subdirectory named by the URL path, if any.
    pub subdir: Option<String>,
}

/// `owner/repo` shorthand.
static SHORTHAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$").unwrap());

/// Regex for GitHub folder URLs: `.../tree/branch/path`
static GITHUB_TREE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://github\.com/([^/]+)/([^/]+?)(?:\.git)?/tree/([^/]+)(?:/(.*))?$").unwrap()
});

/// SSH clone URLs: `git@github.com:owner/repo.git`
static GITHUB_SSH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^git@github\.com:([^/]+)/([^/]+?)(?:\.git)?/?$").unwrap());

/// Path names GitHub reserves under a repository; they never name a folder.
const RESERVED_NAMES: &[&str] = &[
    "releases", "tags", "pull", "pulls", "issues", "actions", "projects", "wiki", "security",
    "pulse", "graphs", "settings", "blob", "tree", "commit", "commits", "blame", "find",
];

/// Parses `owner/repo`, an SSH clone URL, or a GitHub web URL.
///
/// Handles the official folder format (`.../tree/<ref>/<path>`) as well as the
/// "sloppy" `.../owner/repo/<path>` form, which assumes the default branch.
///
/// # Errors
/// Returns [`Error::InvalidRepo`] when no owner/repo pair can be extracted or
/// the URL points at a non-folder page (issues, blobs, ...).
///
/// # Examples
/// ```
/// use readmeify::github::parse_repo_spec;
///
/// let spec = parse_repo_spec("https://github.com/rust-lang/cargo/tree/master/src/cargo").unwrap();
/// assert_eq!(spec.repo.to_string(), "rust-lang/cargo");
/// assert_eq!(spec.git_ref.as_deref(), Some("master"));
/// assert_eq!(spec.subdir.as_deref(), Some("src/cargo"));
///
/// let short = parse_repo_spec("octo/hello").unwrap();
/// assert_eq!(short.subdir, None);
/// ```
pub fn parse_repo_spec(input: &str) -> Result<RepoSpec> {
    let input = input.trim();
    let invalid = || Error::InvalidRepo(input.to_string());

    if let Some(caps) = SHORTHAND_RE.captures(input) {
        return Ok(RepoSpec {
            repo: RepoId::new(&caps[1], &caps[2]),
            git_ref: None,
            subdir: None,
        });
    }

    if let Some(caps) = GITHUB_SSH_RE.captures(input) {
        return Ok(RepoSpec {
            repo: RepoId::new(&caps[1], &caps[2]),
            git_ref: None,
            subdir: None,
        });
    }

    // 1. Try the official, correct format first.
    if let Some(caps) = GITHUB_TREE_URL_RE.captures(input) {
        let subdir = caps
            .get(4)
            .map(|m| m.as_str().trim_matches('/'))
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        return Ok(RepoSpec {
            repo: RepoId::new(&caps[1], &caps[2]),
            git_ref: Some(caps[3].to_string()),
            subdir,
        });
    }

    // 2. Root URLs and the "sloppy" folder form.
    let path_part = input
        .strip_prefix("https://github.com/")
        .or_else(|| input.strip_prefix("http://github.com/"))
        .ok_or_else(invalid)?;
    let parts: Vec<&str> = path_part.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() < 2 {
        return Err(invalid());
    }

    let owner = parts[0];
    let repo = parts[1].trim_end_matches(".git");
    if let Some(first_segment) = parts.get(2) {
        if RESERVED_NAMES.contains(first_segment) {
            return Err(invalid());
        }
    }

    // A branch name is indistinguishable from a directory name here, so the
    // whole remainder is taken as the subdirectory on the default branch.
    let subdir = (parts.len() > 2).then(|| parts[2..].join("/"));
    Ok(RepoSpec {
        repo: RepoId::new(owner, repo),
        git_ref: None,
        subdir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand() {
        let spec = parse_repo_spec("BurntSushi/ripgrep").unwrap();
        assert_eq!(spec.repo, RepoId::new("BurntSushi", "ripgrep"));
        assert_eq!(parse_repo_spec("o/r.git").unwrap().repo.name, "r");
    }

    #[test]
    fn test_root_urls() {
        for url in [
            "https://github.com/rust-lang/rust",
            "https://github.com/rust-lang/rust/",
            "https://github.com/rust-lang/rust.git",
            "git@github.com:rust-lang/rust.git",
        ] {
            let spec = parse_repo_spec(url).unwrap();
            assert_eq!(spec.repo, RepoId::new("rust-lang", "rust"), "url: {}", url);
            assert_eq!(spec.subdir, None);
            assert_eq!(spec.git_ref, None);
        }
    }

    #[test]
    fn test_tree_url_without_path() {
        let spec = parse_repo_spec("https://github.com/o/r/tree/dev").unwrap();
        assert_eq!(spec.git_ref.as_deref(), Some("dev"));
        assert_eq!(spec.subdir, None);
    }

    #[test]
    fn test_sloppy_url_is_subdirectory_on_default_branch() {
        let spec = parse_repo_spec("https://github.com/BurntSushi/ripgrep/crates/ignore").unwrap();
        assert_eq!(spec.git_ref, None);
        assert_eq!(spec.subdir.as_deref(), Some("crates/ignore"));
    }

    #[test]
    fn test_rejects_reserved_and_foreign() {
        assert!(parse_repo_spec("https://github.com/user/repo/issues/1").is_err());
        assert!(parse_repo_spec("https://github.com/user/repo/blob/main/a.rs").is_err());
        assert!(parse_repo_spec("https://gitlab.com/user/repo").is_err());
        assert!(parse_repo_spec("just-a-name").is_err());
        assert!(parse_repo_spec("").is_err());
    }
}
