// tests/cli.rs

mod common;

use assert_cmd::prelude::*;
use common::readmeify_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_lists_subcommands() -> Result<(), Box<dyn std::error::Error>> {
    readmeify_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("context"))
        .stdout(predicate::str::contains("folders"))
        .stdout(predicate::str::contains("repos"))
        .stdout(predicate::str::contains("commit"));
    Ok(())
}

#[test]
fn test_invalid_repo_reference_fails_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    readmeify_cmd()
        .args(["context", "not a repository"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid repository reference"));
    Ok(())
}

#[test]
fn test_repos_without_token_fails_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    readmeify_cmd()
        .arg("repos")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires an access token"));
    Ok(())
}

#[test]
fn test_non_folder_url_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    readmeify_cmd()
        .args(["folders", "https://github.com/octo/demo/issues/12"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid repository reference"));
    Ok(())
}

#[test]
fn test_invalid_exclude_regex_is_a_config_error() -> Result<(), Box<dyn std::error::Error>> {
    readmeify_cmd()
        .args(["context", "octo/demo", "--exclude-regex", "("])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn test_commit_of_blank_file_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let blank = temp.path().join("GENERATED.md");
    fs::write(&blank, "\n   \n")?;
    readmeify_cmd()
        .args(["commit", "octo/demo", "--file"])
        .arg(&blank)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty document"));
    Ok(())
}

#[test]
fn test_commit_with_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("GENERATED.md");
    readmeify_cmd()
        .args(["commit", "octo/demo", "--file"])
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
    Ok(())
}

#[test]
fn test_unreachable_api_is_an_assembly_failure() -> Result<(), Box<dyn std::error::Error>> {
    readmeify_cmd()
        .args(["context", "octo/demo", "--timeout", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Could not read repository: tree listing failed",
        ));
    Ok(())
}

#[test]
fn test_unreachable_api_fails_commit_with_commit_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let doc = temp.path().join("README.md");
    fs::write(&doc, "# Demo\n")?;
    readmeify_cmd()
        .args(["commit", "octo/demo", "--timeout", "5", "--file"])
        .arg(&doc)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Commit to 'README.md' failed"));
    Ok(())
}
