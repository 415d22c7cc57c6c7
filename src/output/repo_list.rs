// src/output/repo_list.rs

use crate::core_types::RepoSummary;
use std::fmt::Write;

/// One line per repository, followed by its description when it has one.
pub(crate) fn write_repo_list(writer: &mut dyn Write, repos: &[RepoSummary]) -> std::fmt::Result {
    for repo in repos {
        write!(writer, "{}", repo.full_name)?;
        if repo.private {
            write!(writer, " [private]")?;
        }
        let language = repo.language.as_deref().unwrap_or("-");
        writeln!(
            writer,
            "  {}  {} star(s)  updated {}",
            language, repo.stars, repo.updated_at
        )?;
        if let Some(description) = repo.description.as_deref().filter(|d| !d.trim().is_empty()) {
            writeln!(writer, "    {}", description)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(full_name: &str, private: bool, description: Option<&str>) -> RepoSummary {
        RepoSummary {
            id: 1,
            name: full_name.rsplit('/').next().unwrap_or(full_name).to_string(),
            full_name: full_name.to_string(),
            description: description.map(str::to_string),
            language: Some("Rust".to_string()),
            stars: 4,
            updated_at: "2024-05-01T10:00:00Z".to_string(),
            private,
        }
    }

    #[test]
    fn test_repo_list_lines() -> std::fmt::Result {
        let repos = vec![
            summary("octo/app", true, Some("An app.")),
            summary("octo/lib", false, Some("  ")),
        ];
        let mut out = String::new();
        write_repo_list(&mut out, &repos)?;
        assert_eq!(
            out,
            "octo/app [private]  Rust  4 star(s)  updated 2024-05-01T10:00:00Z\n    An app.\n\
             octo/lib  Rust  4 star(s)  updated 2024-05-01T10:00:00Z\n"
        );
        Ok(())
    }
}
