// src/github/mod.rs
//! Handles all communication with the repository hosting API.
//!
//! This module provides:
//! - The [`RepositoryApi`] trait the assembler and writer are written against.
//! - [`GitHubClient`], its implementation over the GitHub REST API using `reqwest`.
//! - Parsing of `owner/repo` shorthands and GitHub URLs.

// Declare the sub-modules.
mod api;
mod client;
mod url;

// Re-export the public-facing API.
pub use api::RepositoryApi;
pub use client::{Credentials, GitHubClient};
pub use url::{parse_repo_spec, RepoSpec};
