//! Builds a [`RepositoryContext`] from live repository state.
//!
//! The assembler fetches the tree once, scopes it, and then runs three
//! bounded passes (manifests, source files, notebooks) before fetching the
//! repository metadata. Only the tree and metadata requests can fail the
//! operation; every per-file failure is logged and the file is left out.

use crate::cancellation::CancellationToken;
use crate::config::{Config, Limits};
use crate::constants::NOTEBOOK_LABEL_SUFFIX;
use crate::core_types::{ContentSnippet, RepoId, RepoTree, RepositoryContext, ScopedEntry, ScopedTree};
use crate::discovery::{join_scoped, scope};
use crate::errors::{AssemblyStep, Error, Result};
use crate::filtering::{PathCategory, PathClassifier, MANIFEST_CANDIDATES};
use crate::github::RepositoryApi;
use crate::processing::{decode_remote_file, extract_notebook, truncate_chars, Extraction};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::HashSet;

/// Assembles the context for `repo`, optionally scoped to `subdir`.
///
/// # Errors
/// Returns [`Error::Assembly`] when the tree listing or the metadata request
/// fails, and [`Error::Interrupted`] when `token` is cancelled.
#[tracing::instrument(skip(api, repo, config, token), fields(repo = %repo))]
pub fn assemble_context(
    api: &dyn RepositoryApi,
    repo: &RepoId,
    subdir: Option<&str>,
    config: &Config,
    token: &CancellationToken,
) -> Result<RepositoryContext> {
    let limits = &config.limits;
    let classifier = config.classifier_for(repo);

    check_cancelled(token)?;
    let tree = api
        .fetch_tree(repo)
        .map_err(|e| Error::assembly(AssemblyStep::TreeListing, e))?;
    let scoped = scope(&tree.entries, subdir, limits.tree_display_cap);

    let config_snippets = manifest_pass(api, repo, &tree, &scoped, &classifier, limits, token)?;
    let source_snippets = source_pass(api, repo, &scoped, &classifier, limits, token)?;
    let notebook_snippets = notebook_pass(api, repo, &scoped, &classifier, limits, token)?;

    check_cancelled(token)?;
    let metadata = api
        .fetch_metadata(repo)
        .map_err(|e| Error::assembly(AssemblyStep::RepositoryMetadata, e))?;

    info!(
        "Assembled context for {}: {} tree entries, {} manifest(s), {} source file(s), {} notebook(s)",
        repo,
        scoped.len(),
        config_snippets.len(),
        source_snippets.len(),
        notebook_snippets.len()
    );

    Ok(RepositoryContext {
        name: repo.name.clone(),
        description: metadata.description.unwrap_or_default(),
        primary_language: metadata.language.unwrap_or_default(),
        star_count: metadata.stars,
        topics: metadata.topics.into_iter().collect(),
        subdir: scoped.prefix().map(str::to_string),
        file_tree_listing: scoped.listing(),
        config_snippets,
        source_snippets,
        notebook_snippets,
    })
}

fn check_cancelled(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    Ok(())
}

/// Walks the manifest candidates in priority order, trying the scoped location
/// before the repository root, and stops after `max_manifests` hits.
///
/// Locations missing from a complete tree listing cost no request. A location
/// whose fetch fails (including a 404 for a listed path) falls through to the
/// next one.
fn manifest_pass(
    api: &dyn RepositoryApi,
    repo: &RepoId,
    tree: &RepoTree,
    scoped: &ScopedTree,
    classifier: &PathClassifier,
    limits: &Limits,
    token: &CancellationToken,
) -> Result<Vec<ContentSnippet>> {
    let blobs: HashSet<&str> = tree
        .entries
        .iter()
        .filter(|e| e.is_blob())
        .map(|e| e.path.as_str())
        .collect();
    let may_exist = |path: &str| tree.truncated || blobs.contains(path);
    let prefix = scoped.prefix();

    let mut snippets = Vec::new();
    for &name in MANIFEST_CANDIDATES {
        if snippets.len() >= limits.max_manifests {
            break;
        }
        for (path, relative) in manifest_locations(prefix, name) {
            if !may_exist(&path) {
                continue;
            }
            if classifier.classify_scoped(&path, relative) != PathCategory::Manifest {
                debug!("Manifest '{}' excluded by skip rules", path);
                continue;
            }

            check_cancelled(token)?;
            if let Some((text, size)) = fetch_text(api, repo, &path) {
                debug!("Manifest found: {}", path);
                snippets.push(ContentSnippet {
                    label: display_label(prefix, &path),
                    text: truncate_chars(&text, limits.manifest_char_cap).to_string(),
                    source_size_bytes: size,
                });
                break;
            }
        }
    }
    Ok(snippets)
}

/// Where to look for manifest `name`: inside the scope, then at the root.
/// Each location comes with the path the built-in rules should see.
fn manifest_locations<'a>(prefix: Option<&str>, name: &'a str) -> Vec<(String, &'a str)> {
    match prefix {
        Some(_) => vec![(join_scoped(prefix, name), name), (name.to_string(), name)],
        None => vec![(name.to_string(), name)],
    }
}

/// Samples the first `max_source_files` source entries of the scoped tree.
fn source_pass(
    api: &dyn RepositoryApi,
    repo: &RepoId,
    scoped: &ScopedTree,
    classifier: &PathClassifier,
    limits: &Limits,
    token: &CancellationToken,
) -> Result<Vec<ContentSnippet>> {
    let candidates = take_category(scoped, classifier, PathCategory::Source, limits.max_source_files);
    debug!("Source candidates: {:?}", candidate_paths(&candidates));

    let fetched = fetch_in_tree_order(&candidates, token, |entry| {
        let (text, size) = fetch_text(api, repo, &entry.repo_path)?;
        Some(ContentSnippet {
            label: entry.display_path.clone(),
            text: truncate_chars(&text, limits.source_char_cap).to_string(),
            source_size_bytes: size,
        })
    })?;
    Ok(fetched)
}

/// Samples the first `max_notebooks` notebooks of the scoped tree and keeps
/// the ones with extractable content.
fn notebook_pass(
    api: &dyn RepositoryApi,
    repo: &RepoId,
    scoped: &ScopedTree,
    classifier: &PathClassifier,
    limits: &Limits,
    token: &CancellationToken,
) -> Result<Vec<ContentSnippet>> {
    let candidates = take_category(scoped, classifier, PathCategory::Notebook, limits.max_notebooks);
    debug!("Notebook candidates: {:?}", candidate_paths(&candidates));
    let options = limits.notebook_options();

    let fetched = fetch_in_tree_order(&candidates, token, |entry| {
        let (raw, size) = fetch_text(api, repo, &entry.repo_path)?;
        let text = match extract_notebook(&raw, &options) {
            Extraction::Content(text) => text,
            Extraction::Empty => {
                debug!("Notebook '{}' has no extractable content", entry.repo_path);
                return None;
            }
            Extraction::Unparseable(reason) => {
                warn!("Skipping notebook '{}': {}", entry.repo_path, reason);
                return None;
            }
        };
        Some(ContentSnippet {
            label: format!("{}{}", entry.display_path, NOTEBOOK_LABEL_SUFFIX),
            text: truncate_chars(&text, limits.notebook_char_cap).to_string(),
            source_size_bytes: size,
        })
    })?;
    Ok(fetched)
}

/// First `max` scoped entries of `category`, in tree order. No I/O.
fn take_category<'a>(
    scoped: &'a ScopedTree,
    classifier: &PathClassifier,
    category: PathCategory,
    max: usize,
) -> Vec<&'a ScopedEntry> {
    scoped
        .entries()
        .iter()
        .filter(|e| classifier.classify_scoped(&e.repo_path, &e.display_path) == category)
        .take(max)
        .collect()
}

fn candidate_paths<'a>(candidates: &[&'a ScopedEntry]) -> Vec<&'a str> {
    candidates.iter().map(|e| e.repo_path.as_str()).collect()
}

/// Runs `fetch` over the candidates in parallel; results keep candidate order.
fn fetch_in_tree_order<F>(
    candidates: &[&ScopedEntry],
    token: &CancellationToken,
    fetch: F,
) -> Result<Vec<ContentSnippet>>
where
    F: Fn(&ScopedEntry) -> Option<ContentSnippet> + Sync,
{
    check_cancelled(token)?;
    let results: Vec<Option<ContentSnippet>> = candidates
        .par_iter()
        .map(|entry| {
            if token.is_cancelled() {
                return None;
            }
            fetch(*entry)
        })
        .collect();
    check_cancelled(token)?;
    Ok(results.into_iter().flatten().collect())
}

/// Fetches and decodes one file. Every failure is logged and mapped to `None`.
fn fetch_text(api: &dyn RepositoryApi, repo: &RepoId, path: &str) -> Option<(String, u64)> {
    let file = match api.fetch_file(repo, path) {
        Ok(Some(file)) => file,
        Ok(None) => {
            debug!("'{}' was not found, skipping", path);
            return None;
        }
        Err(e) => {
            warn!("Could not fetch '{}', skipping: {}", path, e);
            return None;
        }
    };
    match decode_remote_file(&file) {
        Ok(text) => Some((text, file.size)),
        Err(e) => {
            warn!("Could not decode '{}', skipping: {}", path, e);
            None
        }
    }
}

/// Scope-relative path for files inside the scope, the repository path otherwise.
fn display_label(prefix: Option<&str>, path: &str) -> String {
    prefix
        .and_then(|p| path.strip_prefix(p))
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::TreeEntry;

    #[test]
    fn test_display_label() {
        assert_eq!(display_label(Some("lib"), "lib/package.json"), "package.json");
        assert_eq!(display_label(Some("lib"), "package.json"), "package.json");
        assert_eq!(display_label(Some("lib"), "library/x.json"), "library/x.json");
        assert_eq!(display_label(None, "src/a.js"), "src/a.js");
    }

    #[test]
    fn test_manifest_locations() {
        assert_eq!(
            manifest_locations(Some("lib"), "package.json"),
            vec![("lib/package.json".to_string(), "package.json"), ("package.json".to_string(), "package.json")]
        );
        assert_eq!(manifest_locations(None, "Cargo.toml"), vec![("Cargo.toml".to_string(), "Cargo.toml")]);
    }

    #[test]
    fn test_take_category_inside_skip_directory_scope() {
        let tree = vec![TreeEntry::blob("build/gen.py"), TreeEntry::blob("build/node_modules/x.js")];
        let scoped = scope(&tree, Some("build"), 120);
        let picked = take_category(&scoped, &PathClassifier::default(), PathCategory::Source, 5);
        assert_eq!(candidate_paths(&picked), vec!["build/gen.py"]);
    }

    #[test]
    fn test_take_category_respects_order_and_max() {
        let tree: Vec<TreeEntry> = ["a.py", "b.png", "c.py", "d.ipynb", "e.py"]
            .iter()
            .map(|p| TreeEntry::blob(*p))
            .collect();
        let scoped = scope(&tree, None, 120);
        let classifier = PathClassifier::default();
        let picked = take_category(&scoped, &classifier, PathCategory::Source, 2);
        assert_eq!(candidate_paths(&picked), vec!["a.py", "c.py"]);
    }
}
