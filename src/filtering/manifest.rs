// src/filtering/manifest.rs

/// Dependency/build manifests used for tech-stack inference, in priority order.
///
/// One per supported ecosystem. The manifest pass walks this list front to
/// back and stops once enough manifests were found, so earlier entries win.
pub const MANIFEST_CANDIDATES: &[&str] = &[
    "package.json",     // Node.js
    "requirements.txt", // Python (pip)
    "Cargo.toml",       // Rust
    "go.mod",           // Go
    "pom.xml",          // Java (Maven)
    "composer.json",    // PHP
    "Gemfile",          // Ruby
    "pyproject.toml",   // Python (PEP 621 / Poetry)
];

/// Checks whether a file name (not a path) is a recognized manifest. Case-sensitive.
pub fn is_manifest_name(file_name: &str) -> bool {
    MANIFEST_CANDIDATES.contains(&file_name)
}
