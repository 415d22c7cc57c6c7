// src/output/snippet_block.rs

use crate::core_types::ContentSnippet;
use std::fmt::Write;

/// Writes one titled section: the banner, then every snippet as
/// `=== <label> ===` followed by its text. Snippets are separated by a blank line.
pub(crate) fn write_section(
    writer: &mut dyn Write,
    title: &str,
    snippets: &[ContentSnippet],
) -> std::fmt::Result {
    writeln!(writer, "=== {} ===", title)?;
    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            writer.write_str("\n\n")?;
        }
        write_snippet(writer, snippet)?;
    }
    Ok(())
}

fn write_snippet(writer: &mut dyn Write, snippet: &ContentSnippet) -> std::fmt::Result {
    write!(writer, "=== {} ===\n{}", snippet.label, snippet.text)
}
