// tests/notebook_extraction.rs

mod common;

use common::notebook;
use readmeify::processing::{extract_notebook, Extraction, NotebookOptions};
use serde_json::json;

#[test]
fn test_outputs_are_kept_verbatim() {
    let raw = notebook(&[(
        "code",
        "print(\"acc:\", 0.9123)",
        json!([{"output_type": "stream", "name": "stdout", "text": "acc: 0.9123\n"}]),
    )]);

    let text = extract_notebook(&raw, &NotebookOptions::default())
        .into_text()
        .unwrap();

    let fence = "```python\nprint(\"acc:\", 0.9123)\n```";
    assert!(text.starts_with(fence));
    let output = &text[fence.len()..];
    assert!(output.contains("acc: 0.9123"));
}

#[test]
fn test_execute_results_and_list_sources() {
    let raw = notebook(&[
        ("markdown", "", json!([])),
        (
            "code",
            "df = load()\ndf.describe()",
            json!([{
                "output_type": "execute_result",
                "execution_count": 1,
                "data": {"text/plain": ["count  100\n", "mean   4.2"]},
                "metadata": {}
            }]),
        ),
    ]);

    let text = extract_notebook(&raw, &NotebookOptions::default())
        .into_text()
        .unwrap();

    assert!(text.contains("[result] count  100\nmean   4.2"));
    // Blank markdown cells contribute nothing.
    assert!(text.starts_with("```python"));
}

#[test]
fn test_short_and_comment_only_cells_are_dropped_but_outputs_kept() {
    let raw = notebook(&[
        (
            "code",
            "# load the data\n# and plot it\nx=1",
            json!([{"output_type": "stream", "name": "stdout", "text": "plotted 12 points\n"}]),
        ),
    ]);

    let text = extract_notebook(&raw, &NotebookOptions::default())
        .into_text()
        .unwrap();

    assert!(!text.contains("```"));
    assert!(text.contains("plotted 12 points"));
}

#[test]
fn test_comments_decide_inclusion_but_are_kept_in_the_fence() {
    let source = "# configure the optimizer\noptimizer = Adam(lr=0.001)";
    let raw = notebook(&[("code", source, json!([]))]);

    let text = extract_notebook(&raw, &NotebookOptions::default())
        .into_text()
        .unwrap();

    assert_eq!(text, format!("```python\n{}\n```", source));
}

#[test]
fn test_extraction_stops_early_on_large_notebooks() {
    let paragraph = "Lorem ipsum dolor sit amet. ".repeat(4);
    let cells: Vec<(&str, &str, serde_json::Value)> = (0..200)
        .map(|_| ("markdown", paragraph.as_str(), json!([])))
        .collect();
    let raw = notebook(&cells);
    let options = NotebookOptions::default();

    let text = extract_notebook(&raw, &options).into_text().unwrap();

    let len = text.chars().count();
    assert!(len > options.max_chars);
    // At most one fragment past the cap is collected.
    assert!(len <= options.max_chars + paragraph.chars().count());
    assert!(text.matches("Lorem").count() < 200 * 4);
}

#[test]
fn test_extraction_is_deterministic() {
    let raw = notebook(&[
        ("markdown", "## Results", json!([])),
        (
            "code",
            "for epoch in range(3): train(epoch)",
            json!([{"output_type": "stream", "name": "stdout", "text": "epoch 0\nepoch 1\nepoch 2\n"}]),
        ),
    ]);
    let options = NotebookOptions::default();

    assert_eq!(extract_notebook(&raw, &options), extract_notebook(&raw, &options));
}

#[test]
fn test_legacy_worksheet_layout() {
    let raw = json!({
        "worksheets": [{
            "cells": [{
                "cell_type": "code",
                "input": ["import pandas as pd\n", "pd.read_csv('x.csv')"],
                "outputs": [{"output_type": "pyout", "text": ["   a  b\n", "0  1  2"]}]
            }]
        }],
        "metadata": {"language": "python"},
        "nbformat": 3
    })
    .to_string();

    let text = extract_notebook(&raw, &NotebookOptions::default())
        .into_text()
        .unwrap();

    assert!(text.starts_with("```python\nimport pandas as pd\npd.read_csv('x.csv')\n```"));
    assert!(text.contains("[result]    a  b\n0  1  2"));
}

#[test]
fn test_unusable_notebooks() {
    let options = NotebookOptions::default();
    assert!(matches!(
        extract_notebook("{\"cells\": 3", &options),
        Extraction::Unparseable(_)
    ));
    assert_eq!(
        extract_notebook(&notebook(&[]), &options),
        Extraction::Empty
    );
}
