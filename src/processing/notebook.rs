//! Flattens a Jupyter notebook into an ordered sequence of text fragments.
//!
//! Markdown cells are kept verbatim, code cells are kept when they carry more
//! than a trivial amount of code, and printed or displayed outputs are kept
//! behind `[output]` / `[result]` markers. Outputs matter most: they are the
//! only place real numbers (scores, timings, row counts) show up.

use crate::constants::{NOTEBOOK_CHAR_CAP, NOTEBOOK_MIN_CODE_CHARS};
use crate::processing::truncate::char_len;
use log::debug;
use serde_json::Value;

const FRAGMENT_SEPARATOR: &str = "\n\n";
const OUTPUT_MARKER: &str = "[output]";
const RESULT_MARKER: &str = "[result]";

/// Limits applied while extracting a notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotebookOptions {
    /// Extraction stops as soon as the accumulated output exceeds this many characters.
    pub max_chars: usize,
    /// A code cell is emitted only when its comment-stripped code is longer than this.
    pub min_code_chars: usize,
}

impl Default for NotebookOptions {
    fn default() -> Self {
        Self {
            max_chars: NOTEBOOK_CHAR_CAP,
            min_code_chars: NOTEBOOK_MIN_CODE_CHARS,
        }
    }
}

/// Result of running the extractor over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one fragment was extracted.
    Content(String),
    /// The document is a notebook but nothing in it was worth keeping.
    Empty,
    /// The document is not a notebook (invalid JSON or no cell list).
    Unparseable(String),
}

impl Extraction {
    /// The extracted text, if any. Both failure shapes collapse to `None`.
    pub fn into_text(self) -> Option<String> {
        match self {
            Extraction::Content(text) => Some(text),
            Extraction::Empty | Extraction::Unparseable(_) => None,
        }
    }
}

/// Extracts markdown, meaningful code and outputs from raw notebook JSON.
///
/// Cells are visited in order. The scan stops once the joined output, plus the
/// separator the next fragment would need, is longer than `options.max_chars`.
/// The result can exceed the cap by at most the length of the last fragment.
///
/// # Examples
/// ```
/// use readmeify::processing::notebook::{extract_notebook, Extraction, NotebookOptions};
///
/// let nb = r##"{"cells": [
///     {"cell_type": "markdown", "source": ["# Results"]},
///     {"cell_type": "code", "source": "x = 1", "outputs": []}
/// ]}"##;
/// let Extraction::Content(text) = extract_notebook(nb, &NotebookOptions::default()) else {
///     panic!("expected content");
/// };
/// assert_eq!(text, "# Results");
/// ```
pub fn extract_notebook(raw: &str, options: &NotebookOptions) -> Extraction {
    let doc: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => return Extraction::Unparseable(format!("invalid JSON: {}", e)),
    };
    let Some(cells) = locate_cells(&doc) else {
        return Extraction::Unparseable("no cell list found".to_string());
    };
    let language = kernel_language(&doc);

    let mut collector = FragmentCollector::new(options.max_chars);
    for cell in cells {
        if collector.is_full() {
            debug!("Notebook extraction cap reached, skipping remaining cells");
            break;
        }
        collect_cell(cell, &language, options, &mut collector);
    }
    collector.finish()
}

/// Finds the cell sequence for both the v4 layout (`cells`) and the v3 layout
/// (`worksheets[*].cells`).
fn locate_cells(doc: &Value) -> Option<Vec<&Value>> {
    if let Some(cells) = doc.get("cells").and_then(Value::as_array) {
        return Some(cells.iter().collect());
    }
    let worksheets = doc.get("worksheets").and_then(Value::as_array)?;
    let cells: Vec<&Value> = worksheets
        .iter()
        .filter_map(|ws| ws.get("cells").and_then(Value::as_array))
        .flatten()
        .collect();
    Some(cells)
}

fn kernel_language(doc: &Value) -> String {
    let metadata = doc.get("metadata");
    metadata
        .and_then(|m| m.pointer("/kernelspec/language"))
        .or_else(|| metadata.and_then(|m| m.pointer("/language_info/name")))
        .or_else(|| metadata.and_then(|m| m.get("language")))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn collect_cell(
    cell: &Value,
    language: &str,
    options: &NotebookOptions,
    collector: &mut FragmentCollector,
) {
    let cell_type = cell.get("cell_type").and_then(Value::as_str).unwrap_or("");
    match cell_type {
        "markdown" | "heading" => {
            let source = join_text(cell.get("source"));
            if !source.trim().is_empty() {
                collector.push(source);
            }
        }
        "code" => {
            // v3 notebooks keep code under `input`
            let source = join_text(cell.get("source").or_else(|| cell.get("input")));
            let meaningful = strip_comment_lines(&source);
            if char_len(meaningful.trim()) > options.min_code_chars {
                collector.push(format!("```{}\n{}\n```", language, source));
            }
            if let Some(outputs) = cell.get("outputs").and_then(Value::as_array) {
                for output in outputs {
                    if collector.is_full() {
                        return;
                    }
                    if let Some(fragment) = output_fragment(output) {
                        collector.push(fragment);
                    }
                }
            }
        }
        _ => {}
    }
}

fn output_fragment(output: &Value) -> Option<String> {
    let output_type = output.get("output_type").and_then(Value::as_str)?;
    match output_type {
        "stream" => {
            let text = join_text(output.get("text"));
            (!text.trim().is_empty()).then(|| format!("{} {}", OUTPUT_MARKER, text))
        }
        "execute_result" | "display_data" | "pyout" => {
            let text = output
                .get("data")
                .and_then(|d| d.get("text/plain"))
                .or_else(|| output.get("text"))
                .map(|v| join_text(Some(v)))?;
            (!text.trim().is_empty()).then(|| format!("{} {}", RESULT_MARKER, text))
        }
        _ => None,
    }
}

/// Joins a notebook text field, which is either a string or a list of strings.
fn join_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(parts)) => parts.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}

/// Removes lines that hold nothing but a comment (`#` or `//`).
///
/// Only used to decide whether a code cell is worth keeping; the emitted code
/// block always carries the original source.
pub fn strip_comment_lines(code: &str) -> String {
    code.lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !(trimmed.starts_with('#') || trimmed.starts_with("//"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Accumulates fragments and tracks the joined length for the early exit.
struct FragmentCollector {
    fragments: Vec<String>,
    joined_chars: usize,
    max_chars: usize,
}

impl FragmentCollector {
    fn new(max_chars: usize) -> Self {
        Self {
            fragments: Vec::new(),
            joined_chars: 0,
            max_chars,
        }
    }

    fn push(&mut self, fragment: String) {
        self.joined_chars += self.pending_separator() + char_len(&fragment);
        self.fragments.push(fragment);
    }

    /// `true` once even the separator for another fragment would cross the cap.
    fn is_full(&self) -> bool {
        self.joined_chars + self.pending_separator() > self.max_chars
    }

    fn pending_separator(&self) -> usize {
        if self.fragments.is_empty() {
            0
        } else {
            FRAGMENT_SEPARATOR.len()
        }
    }

    fn finish(self) -> Extraction {
        if self.fragments.is_empty() {
            Extraction::Empty
        } else {
            Extraction::Content(self.fragments.join(FRAGMENT_SEPARATOR))
        }
    }
}
