// src/filtering/lockfile.rs

// Lockfiles are resolved dependency graphs: long, generated, and useless for
// describing a project. They are always skipped (case-insensitive match).
const LOCKFILE_NAMES: &[&str] = &[
    // --- Web Development (JavaScript/TypeScript) ---
    "package-lock.json",   // npm v5+
    "yarn.lock",           // Yarn
    "pnpm-lock.yaml",      // pnpm
    "npm-shrinkwrap.json", // Older npm
    "bun.lockb",           // Bun (binary format)
    "deno.lock",           // Deno
    // --- PHP ---
    "composer.lock",
    // --- Ruby ---
    "gemfile.lock",
    // --- Python ---
    "poetry.lock",
    "pipfile.lock",
    "pdm.lock",
    "uv.lock",
    "conda-lock.yml",
    // --- Go ---
    "go.sum",
    "gopkg.lock",
    // --- Java ---
    "gradle.lockfile",
    // --- .NET ---
    "packages.lock.json",
    "paket.lock",
    // --- Swift / Objective-C ---
    "package.resolved",
    "podfile.lock",
    "cartfile.resolved",
    // --- Elixir / Erlang ---
    "mix.lock",
    "rebar.lock",
    // --- Dart / Flutter ---
    "pubspec.lock",
    // --- Haskell ---
    "stack.yaml.lock",
    "cabal.project.freeze",
    // --- Rust ---
    "cargo.lock",
    // --- Nix ---
    "flake.lock",
    // --- R ---
    "renv.lock",
    // --- Julia ---
    "manifest.toml",
    // --- Infrastructure as Code ---
    ".terraform.lock.hcl",
    // --- Bazel ---
    "module.bazel.lock",
];

/// Checks if a repository path names a common lockfile.
pub fn is_lockfile(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or(path).to_lowercase();
    LOCKFILE_NAMES.iter().any(|&lockfile| file_name == lockfile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_lockfile_matches() {
        assert!(is_lockfile("path/to/Cargo.lock"));
        assert!(is_lockfile("package-lock.json"));
        assert!(is_lockfile("Yarn.lock")); // Case insensitive
        assert!(is_lockfile("web/PNPM-LOCK.YAML"));
        assert!(is_lockfile("go.sum"));
    }

    #[test]
    fn test_is_lockfile_no_match() {
        assert!(!is_lockfile("src/main.rs"));
        assert!(!is_lockfile("Cargo.toml"));
        assert!(!is_lockfile("lockfile.txt"));
        assert!(!is_lockfile("path/to/"));
    }
}
