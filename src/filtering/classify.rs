//! Path classification: decides what a tree entry is good for from its path alone.
//!
//! Classification is an ordered rule table evaluated first-match-wins. Adding
//! an ecosystem means adding rows, not branches. No content is inspected, so
//! it can run over thousands of entries before any fetch happens.

use super::extension::{file_extension, is_source_extension, NOTEBOOK_EXTENSION};
use super::lockfile::is_lockfile;
use super::manifest::is_manifest_name;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// What a repository path is used for during context assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCategory {
    /// A dependency/build descriptor, used for tech-stack inference.
    Manifest,
    /// A Jupyter notebook.
    Notebook,
    /// Source code worth sampling.
    Source,
    /// Everything else.
    Skip,
}

/// A predicate over a repository-relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    /// Any directory component equals the value.
    DirSegment(&'static str),
    /// The last component is a known lockfile.
    Lockfile,
    /// The last component is a recognized manifest name.
    ManifestName,
    /// The last component ends with the value, ignoring case.
    Suffix(&'static str),
    /// The lowercase extension equals the value.
    Extension(&'static str),
    /// The lowercase extension is in the source allow-list.
    SourceExtension,
}

impl Pattern {
    fn matches(&self, path: &str, file_name: &str, ext: Option<&str>) -> bool {
        match *self {
            Pattern::DirSegment(dir) => {
                let mut segments: Vec<&str> = path.split('/').collect();
                segments.pop(); // drop the file name
                segments.contains(&dir)
            }
            Pattern::Lockfile => is_lockfile(file_name),
            Pattern::ManifestName => is_manifest_name(file_name),
            Pattern::Suffix(suffix) => file_name.to_lowercase().ends_with(suffix),
            Pattern::Extension(e) => ext == Some(e),
            Pattern::SourceExtension => ext.is_some_and(is_source_extension),
        }
    }
}

/// Directories holding build output, dependencies, caches or VCS metadata.
const SKIP_DIRECTORIES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "vendor",
    "dist",
    "build",
    "out",
    "target",
    "coverage",
    ".next",
    ".nuxt",
    ".turbo",
    ".cache",
    "__pycache__",
    ".venv",
    "venv",
    "site-packages",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    ".gradle",
    ".idea",
    ".vscode",
    ".ipynb_checkpoints",
];

/// This engine's own implementation files. Only skipped when the repository
/// being assembled is the engine's own (see [`PathClassifier::skip_engine_paths`]).
const ENGINE_PATHS: &[&str] = &[
    "src/assemble.rs",
    "src/commit.rs",
    "src/discovery/scope.rs",
    "src/filtering/classify.rs",
    "src/processing/notebook.rs",
    "src/github/client.rs",
];

/// Minified, bundled or generated artifacts.
const GENERATED_SUFFIXES: &[&str] = &[
    ".min.js",
    ".min.css",
    ".min.mjs",
    ".bundle.js",
    ".chunk.js",
    ".packed.js",
    ".map",
    ".pb.go",
    "_pb2.py",
    ".generated.ts",
    ".d.ts",
];

/// The ordered rule table. First match wins; no match means [`PathCategory::Skip`].
static RULES: Lazy<Vec<(Pattern, PathCategory)>> = Lazy::new(|| {
    let mut rules = Vec::new();
    rules.extend(
        SKIP_DIRECTORIES
            .iter()
            .map(|&d| (Pattern::DirSegment(d), PathCategory::Skip)),
    );
    rules.push((Pattern::Lockfile, PathCategory::Skip));
    rules.extend(
        GENERATED_SUFFIXES
            .iter()
            .map(|&s| (Pattern::Suffix(s), PathCategory::Skip)),
    );
    rules.push((Pattern::ManifestName, PathCategory::Manifest));
    rules.push((Pattern::Extension(NOTEBOOK_EXTENSION), PathCategory::Notebook));
    rules.push((Pattern::SourceExtension, PathCategory::Source));
    rules
});

/// Classifies a path using the built-in rule table.
///
/// Total and deterministic: every string maps to exactly one category.
///
/// # Examples
/// ```
/// use readmeify::filtering::{classify_path, PathCategory};
///
/// assert_eq!(classify_path("package.json"), PathCategory::Manifest);
/// assert_eq!(classify_path("notebooks/eda.ipynb"), PathCategory::Notebook);
/// assert_eq!(classify_path("src/a.js"), PathCategory::Source);
/// assert_eq!(classify_path("node_modules/y.js"), PathCategory::Skip);
/// assert_eq!(classify_path("logo.png"), PathCategory::Skip);
/// ```
pub fn classify_path(path: &str) -> PathCategory {
    let path = path.trim_start_matches('/');
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let ext = file_extension(path);
    RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(path, file_name, ext.as_deref()))
        .map_or(PathCategory::Skip, |(_, category)| *category)
}

/// A classifier with additional, user-supplied skip rules.
///
/// The extra regexes are evaluated against the full repository path before the
/// built-in table; a match means [`PathCategory::Skip`].
#[derive(Debug, Clone, Default)]
pub struct PathClassifier {
    extra_skip: Vec<Regex>,
    skip_engine_paths: bool,
}

impl PathClassifier {
    pub fn new(extra_skip: Vec<Regex>) -> Self {
        Self {
            extra_skip,
            skip_engine_paths: false,
        }
    }

    /// Also skips this engine's own implementation files. Enabled only for the
    /// engine's own repository.
    pub fn skip_engine_paths(mut self, enabled: bool) -> Self {
        self.skip_engine_paths = enabled;
        self
    }

    /// Classifies a repository path with no scope applied.
    pub fn classify(&self, path: &str) -> PathCategory {
        self.classify_scoped(path, path)
    }

    /// Classifies an entry of a scoped tree.
    ///
    /// User rules and engine paths are matched against `repo_path`; the built-in
    /// table sees `relative_path`, so scoping into a folder named like a skip
    /// directory (`build/`, `vendor/`) still samples its contents.
    ///
    /// ```
    /// use readmeify::filtering::{PathCategory, PathClassifier};
    ///
    /// let classifier = PathClassifier::default();
    /// assert_eq!(classifier.classify("build/gen.py"), PathCategory::Skip);
    /// assert_eq!(classifier.classify_scoped("build/gen.py", "gen.py"), PathCategory::Source);
    /// ```
    pub fn classify_scoped(&self, repo_path: &str, relative_path: &str) -> PathCategory {
        if self.extra_skip.iter().any(|re| re.is_match(repo_path)) {
            return PathCategory::Skip;
        }
        if self.skip_engine_paths && ENGINE_PATHS.contains(&repo_path.trim_start_matches('/')) {
            return PathCategory::Skip;
        }
        classify_path(relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifests_anywhere_outside_skipped_dirs() {
        assert_eq!(classify_path("Cargo.toml"), PathCategory::Manifest);
        assert_eq!(classify_path("lib/package.json"), PathCategory::Manifest);
        assert_eq!(
            classify_path("node_modules/left-pad/package.json"),
            PathCategory::Skip
        );
    }

    #[test]
    fn test_lockfiles_and_generated_are_skipped() {
        assert_eq!(classify_path("Cargo.lock"), PathCategory::Skip);
        assert_eq!(classify_path("web/package-lock.json"), PathCategory::Skip);
        assert_eq!(classify_path("static/app.min.js"), PathCategory::Skip);
        assert_eq!(classify_path("types/index.d.ts"), PathCategory::Skip);
        assert_eq!(classify_path("api/service.pb.go"), PathCategory::Skip);
    }

    #[test]
    fn test_build_and_vcs_directories_are_skipped() {
        assert_eq!(classify_path("dist/index.js"), PathCategory::Skip);
        assert_eq!(classify_path("target/debug/build.rs"), PathCategory::Skip);
        assert_eq!(classify_path(".git/hooks/pre-commit.sh"), PathCategory::Skip);
        assert_eq!(
            classify_path("nb/.ipynb_checkpoints/eda-checkpoint.ipynb"),
            PathCategory::Skip
        );
        // A file merely named like a skip directory is not affected.
        assert_eq!(classify_path("src/build.rs"), PathCategory::Source);
    }

    #[test]
    fn test_engine_paths_only_skipped_when_enabled() {
        let foreign = PathClassifier::default();
        assert_eq!(foreign.classify("src/assemble.rs"), PathCategory::Source);
        assert_eq!(classify_path("src/commit.rs"), PathCategory::Source);

        let own = PathClassifier::default().skip_engine_paths(true);
        assert_eq!(own.classify("src/assemble.rs"), PathCategory::Skip);
        assert_eq!(own.classify("src/processing/notebook.rs"), PathCategory::Skip);
        assert_eq!(own.classify("other/src/assemble.rs"), PathCategory::Source);
    }

    #[test]
    fn test_scoped_classification_uses_relative_path_for_table() {
        let classifier = PathClassifier::new(vec![Regex::new(r"^out/secret").unwrap()]);
        assert_eq!(classifier.classify_scoped("build/package.json", "package.json"), PathCategory::Manifest);
        assert_eq!(classifier.classify_scoped("build/gen.py", "gen.py"), PathCategory::Source);
        // Skip directories below the scope still apply.
        assert_eq!(
            classifier.classify_scoped("build/node_modules/x.js", "node_modules/x.js"),
            PathCategory::Skip
        );
        // User rules see the repository path.
        assert_eq!(classifier.classify_scoped("out/secret.py", "secret.py"), PathCategory::Skip);
    }

    #[test]
    fn test_binary_and_unknown_extensions_are_skipped() {
        for path in ["logo.png", "data.zip", "font.woff2", "README.md", "Makefile", ""] {
            assert_eq!(classify_path(path), PathCategory::Skip, "path: {:?}", path);
        }
    }

    #[test]
    fn test_notebook_and_source() {
        assert_eq!(classify_path("Analysis.IPYNB"), PathCategory::Notebook);
        assert_eq!(classify_path("scripts/train.py"), PathCategory::Source);
        assert_eq!(classify_path("app/page.JSX"), PathCategory::Source);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let paths = ["a.rs", "package.json", "x.ipynb", "node_modules/y.js", "weird//path"];
        for p in paths {
            assert_eq!(classify_path(p), classify_path(p));
        }
    }

    #[test]
    fn test_extra_skip_rules_take_precedence() {
        let classifier = PathClassifier::new(vec![Regex::new(r"^legacy/").unwrap()]);
        assert_eq!(classifier.classify("legacy/old.py"), PathCategory::Skip);
        assert_eq!(classifier.classify("legacy2/new.py"), PathCategory::Source);
        assert_eq!(classifier.classify("package.json"), PathCategory::Manifest);
    }
}
