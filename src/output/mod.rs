// src/output/mod.rs

//! Renders an assembled [`RepositoryContext`] as the plain-text block handed
//! to a document generator.

use crate::constants::NO_CONTENT_PLACEHOLDER;
use crate::core_types::{RepoSummary, RepositoryContext};
use log::debug;
use std::fmt::Write;

mod header;
mod repo_list;
mod snippet_block;

pub const CONFIG_SECTION_TITLE: &str = "CONFIG / DEPENDENCY FILES";
pub const SOURCE_SECTION_TITLE: &str = "SOURCE CODE";
pub const NOTEBOOK_SECTION_TITLE: &str = "NOTEBOOK CELLS + OUTPUTS";

/// Writes the full context block: header, `FILE TREE:` listing, then the
/// non-empty content sections, or a placeholder if all of them are empty.
pub fn write_context_block(writer: &mut dyn Write, ctx: &RepositoryContext) -> std::fmt::Result {
    header::write_repo_header(writer, ctx)?;
    writeln!(writer, "FILE TREE:\n{}\n", ctx.file_tree_listing)?;

    let sections = [
        (CONFIG_SECTION_TITLE, &ctx.config_snippets),
        (SOURCE_SECTION_TITLE, &ctx.source_snippets),
        (NOTEBOOK_SECTION_TITLE, &ctx.notebook_snippets),
    ];
    let mut first_section = true;
    for (title, snippets) in sections.iter().filter(|(_, s)| !s.is_empty()) {
        if !first_section {
            writer.write_str("\n\n")?;
        }
        snippet_block::write_section(writer, title, snippets)?;
        first_section = false;
    }
    if first_section {
        debug!("Context for '{}' has no sampled content", ctx.name);
        writer.write_str(NO_CONTENT_PLACEHOLDER)?;
    }
    writeln!(writer)
}

/// Renders the context block into a `String`.
///
/// ```
/// use readmeify::core_types::RepositoryContext;
/// use readmeify::output::render_context_block;
///
/// let ctx = RepositoryContext {
///     name: "demo".into(),
///     description: String::new(),
///     primary_language: "Rust".into(),
///     star_count: 3,
///     topics: Default::default(),
///     subdir: None,
///     file_tree_listing: "src/main.rs".into(),
///     config_snippets: vec![],
///     source_snippets: vec![],
///     notebook_snippets: vec![],
/// };
/// let text = render_context_block(&ctx);
/// assert!(text.contains("FILE TREE:\nsrc/main.rs\n"));
/// assert!(text.ends_with("(no file content available)\n"));
/// ```
pub fn render_context_block(ctx: &RepositoryContext) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_context_block(&mut out, ctx);
    out
}

/// Renders the `repos` listing, most recently updated first as received.
pub fn render_repo_list(repos: &[RepoSummary]) -> String {
    let mut out = String::new();
    let _ = repo_list::write_repo_list(&mut out, repos);
    out
}
