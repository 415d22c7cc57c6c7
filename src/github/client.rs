// src/github/client.rs
//! Talks to the GitHub REST API with a blocking `reqwest` client.

use super::api::RepositoryApi;
use crate::config::ApiConfig;
use crate::constants::USER_REPOS_PAGE_SIZE;
use crate::core_types::{CommitRequest, RemoteFile, RepoId, RepoMetadata, RepoSummary, RepoTree, TreeEntry};
use crate::errors::{Error, Result};
use crate::processing::encode_content;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::fmt;

/// An access token for the GitHub API (OAuth or personal access token).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Reads `GITHUB_TOKEN`, ignoring an empty value.
    pub fn from_env() -> Option<Self> {
        env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .map(Self::new)
    }

    fn bearer_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token.trim()))
            .map_err(|_| Error::Config("access token contains invalid characters".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A tree listing as returned by the Git Trees API.
#[derive(Deserialize, Debug)]
struct TreeResponse {
    tree: Vec<TreeItem>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Deserialize, Debug)]
struct TreeItem {
    path: String,
    #[serde(rename = "type")]
    item_type: String,
}

/// A single file from the Contents API.
#[derive(Deserialize, Debug)]
struct ContentItem {
    path: String,
    sha: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    encoding: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// The repository fields the context needs.
#[derive(Deserialize, Debug)]
struct RepoInfo {
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    topics: Vec<String>,
}

/// One entry of `GET /user/repos`.
#[derive(Deserialize, Debug)]
struct UserRepo {
    id: u64,
    name: String,
    full_name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    private: bool,
}

impl From<UserRepo> for RepoSummary {
    fn from(repo: UserRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description,
            language: repo.language,
            stars: repo.stargazers_count,
            updated_at: repo.updated_at.unwrap_or_default(),
            private: repo.private,
        }
    }
}

#[derive(Deserialize, Debug)]
struct PutResponse {
    content: Option<PutContent>,
}

#[derive(Deserialize, Debug)]
struct PutContent {
    sha: String,
}

/// [`RepositoryApi`] over `api.github.com` (or a GitHub Enterprise base URL).
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    git_ref: String,
}

impl GitHubClient {
    /// Builds a client with default headers for GitHub API interaction.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an unusable base URL, user agent or token.
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&api.user_agent)
                .map_err(|_| Error::Config(format!("invalid user agent '{}'", api.user_agent)))?,
        );
        if let Some(credentials) = &api.credentials {
            headers.insert(AUTHORIZATION, credentials.bearer_header()?);
            log::debug!("Using access token for authentication.");
        } else {
            log::warn!("No access token configured; private repositories are unreachable and rate limits are low.");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(api.timeout)
            .build()
            .map_err(|e| Error::Config(format!("could not build HTTP client: {}", e)))?;
        let base_url = Url::parse(&api.base_url)
            .map_err(|e| Error::Config(format!("invalid API base URL '{}': {}", api.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid API base URL '{}'",
                api.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            git_ref: api.git_ref.clone(),
        })
    }

    /// Builds `<base>/repos/<owner>/<repo>/<segments...>`, percent-encoding each segment.
    fn repo_url(&self, repo: &RepoId, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["repos", repo.owner.as_str(), repo.name.as_str()])
                .extend(segments.iter().flat_map(|s| s.split('/')));
        }
        url
    }

    /// `<base>/user/repos`, owned repositories only, most recently updated first.
    fn user_repos_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["user", "repos"]);
        }
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &USER_REPOS_PAGE_SIZE.to_string())
            .append_pair("type", "owner");
        url
    }

    fn is_default_ref(&self) -> bool {
        self.git_ref == crate::constants::DEFAULT_GIT_REF
    }

    /// Sends a request and returns the body of a successful response.
    fn send(&self, request: RequestBuilder, url: &Url) -> Result<String> {
        let response = request.send().map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        let body = response.text().map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(body)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        log::debug!("GET {}", url);
        let body = self.send(self.client.get(url.clone()), &url)?;
        serde_json::from_str(&body).map_err(|source| Error::InvalidResponse {
            url: url.to_string(),
            source,
        })
    }
}

impl RepositoryApi for GitHubClient {
    fn fetch_tree(&self, repo: &RepoId) -> Result<RepoTree> {
        let mut url = self.repo_url(repo, &["git", "trees", self.git_ref.as_str()]);
        url.query_pairs_mut().append_pair("recursive", "1");
        let response: TreeResponse = self.get_json(url)?;
        if response.truncated {
            log::warn!(
                "Tree listing for {} was truncated by the API; sampling from the partial listing.",
                repo
            );
        }
        let entries = response
            .tree
            .into_iter()
            .filter_map(|item| match item.item_type.as_str() {
                "blob" => Some(TreeEntry::blob(item.path)),
                "tree" => Some(TreeEntry::tree(item.path)),
                // submodule commits have no content to sample
                _ => None,
            })
            .collect();
        Ok(RepoTree {
            entries,
            truncated: response.truncated,
        })
    }

    fn fetch_file(&self, repo: &RepoId, path: &str) -> Result<Option<RemoteFile>> {
        let mut url = self.repo_url(repo, &["contents", path]);
        if !self.is_default_ref() {
            url.query_pairs_mut().append_pair("ref", &self.git_ref);
        }
        optional_file(self.get_json::<ContentItem>(url))
    }

    fn fetch_metadata(&self, repo: &RepoId) -> Result<RepoMetadata> {
        let info: RepoInfo = self.get_json(self.repo_url(repo, &[]))?;
        Ok(RepoMetadata {
            description: info.description,
            language: info.language,
            stars: info.stargazers_count,
            topics: info.topics,
        })
    }

    fn list_user_repos(&self) -> Result<Vec<RepoSummary>> {
        let repos: Vec<UserRepo> = self.get_json(self.user_repos_url())?;
        Ok(repos.into_iter().map(RepoSummary::from).collect())
    }

    fn put_file(&self, repo: &RepoId, request: &CommitRequest) -> Result<String> {
        let url = self.repo_url(repo, &["contents", request.target_path.as_str()]);
        log::debug!(
            "PUT {} ({})",
            url,
            if request.is_update() { "update" } else { "create" }
        );
        let body = put_body(request);
        let response_body = self.send(self.client.put(url.clone()).json(&body), &url)?;
        let response: PutResponse =
            serde_json::from_str(&response_body).map_err(|source| Error::InvalidResponse {
                url: url.to_string(),
                source,
            })?;
        Ok(response.content.map(|c| c.sha).unwrap_or_default())
    }
}

/// Maps a contents response to a file, treating 404 as "nothing there".
fn optional_file(response: Result<ContentItem>) -> Result<Option<RemoteFile>> {
    match response {
        Ok(item) => Ok(Some(RemoteFile {
            path: item.path,
            sha: item.sha,
            size: item.size,
            encoding: item.encoding.unwrap_or_else(|| "none".to_string()),
            content: item.content.unwrap_or_default(),
        })),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// The JSON body of a contents `PUT`.
///
/// `sha` is sent only for updates; without it the service refuses to replace an
/// existing file, which is what makes a create conditional too.
fn put_body(request: &CommitRequest) -> Value {
    let mut body = json!({
        "message": request.message,
        "content": encode_content(&request.content),
    });
    if let Some(sha) = &request.existing_revision {
        body["sha"] = Value::String(sha.clone());
    }
    if let Some(branch) = &request.branch {
        body["branch"] = Value::String(branch.clone());
    }
    body
}

/// Extracts the `message` field of a GitHub error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
