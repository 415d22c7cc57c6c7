// src/output/header.rs

use crate::core_types::RepositoryContext;
use std::fmt::Write;

/// Writes the repository header lines followed by one blank line.
pub(crate) fn write_repo_header(writer: &mut dyn Write, ctx: &RepositoryContext) -> std::fmt::Result {
    writeln!(writer, "Repository: {}", ctx.name)?;
    if let Some(subdir) = &ctx.subdir {
        writeln!(writer, "Subdirectory: {}", subdir)?;
    }
    writeln!(writer, "Description: {}", or_none(&ctx.description))?;
    writeln!(writer, "Language: {}", or_none(&ctx.primary_language))?;
    writeln!(writer, "Stars: {}", ctx.star_count)?;
    if !ctx.topics.is_empty() {
        let topics: Vec<&str> = ctx.topics.iter().map(String::as_str).collect();
        writeln!(writer, "Topics: {}", topics.join(", "))?;
    }
    writeln!(writer)
}

fn or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        "(none)"
    } else {
        value
    }
}
