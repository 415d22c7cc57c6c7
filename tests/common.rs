// tests/common.rs

#![allow(dead_code)] // Each test crate uses a different subset of these helpers.

use readmeify::core_types::{
    CommitRequest, RemoteFile, RepoId, RepoMetadata, RepoSummary, RepoTree, TreeEntry,
};
use readmeify::errors::{Error, Result};
use readmeify::github::RepositoryApi;
use readmeify::processing::encode_content;
use readmeify::CancellationToken;
use std::collections::{HashMap, HashSet};
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

// Helper function to get the binary command
pub fn readmeify_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("readmeify"));
    // Never reach a real API from CLI tests.
    cmd.env_remove("GITHUB_TOKEN")
        .arg("--api-url")
        .arg("http://127.0.0.1:9");
    cmd
}

/// One recorded request against the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Tree,
    File(String),
    Metadata,
    UserRepos,
    Put(String),
}

#[derive(Debug, Clone)]
struct StoredFile {
    text: String,
    sha: String,
}

/// An in-memory repository behaving like the GitHub contents API:
/// revision-checked writes, 404s for missing files, injectable failures.
pub struct MockRepository {
    tree: Vec<TreeEntry>,
    tree_truncated: bool,
    files: Mutex<HashMap<String, StoredFile>>,
    raw_files: HashMap<String, RemoteFile>,
    failing_paths: HashSet<String>,
    metadata: RepoMetadata,
    user_repos: Vec<RepoSummary>,
    fail_tree: bool,
    fail_metadata: bool,
    cancel_on: Option<(String, CancellationToken)>,
    write_before_put: Mutex<Option<(String, String)>>,
    calls: Mutex<Vec<Call>>,
    next_revision: AtomicU64,
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            tree: Vec::new(),
            tree_truncated: false,
            files: Mutex::new(HashMap::new()),
            raw_files: HashMap::new(),
            failing_paths: HashSet::new(),
            metadata: RepoMetadata::default(),
            user_repos: Vec::new(),
            fail_tree: false,
            fail_metadata: false,
            cancel_on: None,
            write_before_put: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            next_revision: AtomicU64::new(1),
        }
    }

    /// Adds a blob to the tree listing and stores its content.
    pub fn file(mut self, path: &str, text: &str) -> Self {
        self.tree.push(TreeEntry::blob(path));
        let sha = self.new_revision();
        self.files.lock().unwrap().insert(
            path.to_string(),
            StoredFile {
                text: text.to_string(),
                sha,
            },
        );
        self
    }

    /// Stores a file that is not part of the tree listing.
    pub fn unlisted_file(self, path: &str, text: &str) -> Self {
        let sha = self.new_revision();
        self.files.lock().unwrap().insert(
            path.to_string(),
            StoredFile {
                text: text.to_string(),
                sha,
            },
        );
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.tree.push(TreeEntry::tree(path));
        self
    }

    /// A blob that is listed but answers 404.
    pub fn listed_only(mut self, path: &str) -> Self {
        self.tree.push(TreeEntry::blob(path));
        self
    }

    /// A blob whose fetch answers with the given transport encoding and payload.
    pub fn raw_file(mut self, path: &str, encoding: &str, content: &str) -> Self {
        self.tree.push(TreeEntry::blob(path));
        self.raw_files.insert(
            path.to_string(),
            RemoteFile {
                path: path.to_string(),
                sha: "raw".to_string(),
                size: content.len() as u64,
                encoding: encoding.to_string(),
                content: content.to_string(),
            },
        );
        self
    }

    /// A blob whose fetch fails with a server error.
    pub fn failing_file(mut self, path: &str) -> Self {
        self.tree.push(TreeEntry::blob(path));
        self.failing_paths.insert(path.to_string());
        self
    }

    pub fn metadata(mut self, metadata: RepoMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Reports the tree listing as cut short by the service.
    pub fn truncated_tree(mut self) -> Self {
        self.tree_truncated = true;
        self
    }

    pub fn user_repos(mut self, repos: Vec<RepoSummary>) -> Self {
        self.user_repos = repos;
        self
    }

    pub fn failing_tree(mut self) -> Self {
        self.fail_tree = true;
        self
    }

    pub fn failing_metadata(mut self) -> Self {
        self.fail_metadata = true;
        self
    }

    /// Cancels `token` as soon as `path` is fetched.
    pub fn cancel_on_fetch(mut self, path: &str, token: &CancellationToken) -> Self {
        self.cancel_on = Some((path.to_string(), token.clone()));
        self
    }

    /// Simulates another writer changing `path` between our read and our write.
    pub fn concurrent_write(&self, path: &str, text: &str) {
        *self.write_before_put.lock().unwrap() = Some((path.to_string(), text.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths requested from the contents endpoint, in request order.
    pub fn fetched_paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::File(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).map(|f| f.text.clone())
    }

    pub fn revision(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).map(|f| f.sha.clone())
    }

    fn new_revision(&self) -> String {
        format!("rev-{}", self.next_revision.fetch_add(1, Ordering::SeqCst))
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn status(path: &str, status: u16, message: &str) -> Error {
        Error::Status {
            url: format!("mock://contents/{}", path),
            status,
            message: message.to_string(),
        }
    }
}

impl RepositoryApi for MockRepository {
    fn fetch_tree(&self, _repo: &RepoId) -> Result<RepoTree> {
        self.record(Call::Tree);
        if self.fail_tree {
            return Err(Self::status("git/trees", 404, "Not Found"));
        }
        Ok(RepoTree {
            entries: self.tree.clone(),
            truncated: self.tree_truncated,
        })
    }

    fn fetch_file(&self, _repo: &RepoId, path: &str) -> Result<Option<RemoteFile>> {
        self.record(Call::File(path.to_string()));
        if let Some((trigger, token)) = &self.cancel_on {
            if trigger == path {
                token.cancel();
            }
        }
        if self.failing_paths.contains(path) {
            return Err(Self::status(path, 500, "Server Error"));
        }
        if let Some(raw) = self.raw_files.get(path) {
            return Ok(Some(raw.clone()));
        }
        Ok(self.files.lock().unwrap().get(path).map(|f| RemoteFile {
            path: path.to_string(),
            sha: f.sha.clone(),
            size: f.text.len() as u64,
            encoding: "base64".to_string(),
            content: encode_content(&f.text),
        }))
    }

    fn fetch_metadata(&self, _repo: &RepoId) -> Result<RepoMetadata> {
        self.record(Call::Metadata);
        if self.fail_metadata {
            return Err(Self::status("repos", 403, "API rate limit exceeded"));
        }
        Ok(self.metadata.clone())
    }

    fn list_user_repos(&self) -> Result<Vec<RepoSummary>> {
        self.record(Call::UserRepos);
        Ok(self.user_repos.clone())
    }

    fn put_file(&self, _repo: &RepoId, request: &CommitRequest) -> Result<String> {
        self.record(Call::Put(request.target_path.clone()));
        if let Some((path, text)) = self.write_before_put.lock().unwrap().take() {
            let sha = self.new_revision();
            self.files
                .lock()
                .unwrap()
                .insert(path, StoredFile { text, sha });
        }

        let mut files = self.files.lock().unwrap();
        let current = files.get(&request.target_path).map(|f| f.sha.clone());
        match (&request.existing_revision, current) {
            (None, Some(_)) => {
                return Err(Self::status(
                    &request.target_path,
                    422,
                    "Invalid request. \"sha\" wasn't supplied.",
                ))
            }
            (Some(expected), current) if current.as_ref() != Some(expected) => {
                return Err(Self::status(
                    &request.target_path,
                    409,
                    &format!("{} does not match", expected),
                ))
            }
            _ => {}
        }
        let sha = self.new_revision();
        files.insert(
            request.target_path.clone(),
            StoredFile {
                text: request.content.clone(),
                sha: sha.clone(),
            },
        );
        Ok(sha)
    }
}

pub fn repo() -> RepoId {
    RepoId::new("octo", "demo")
}

/// A minimal nbformat 4 notebook built from `(cell_type, source, outputs)` triples.
pub fn notebook(cells: &[(&str, &str, serde_json::Value)]) -> String {
    let cells: Vec<serde_json::Value> = cells
        .iter()
        .map(|(kind, source, outputs)| {
            serde_json::json!({
                "cell_type": kind,
                "source": source,
                "outputs": outputs,
                "metadata": {}
            })
        })
        .collect();
    serde_json::json!({
        "cells": cells,
        "metadata": {"kernelspec": {"language": "python", "name": "python3"}},
        "nbformat": 4,
        "nbformat_minor": 5
    })
    .to_string()
}
