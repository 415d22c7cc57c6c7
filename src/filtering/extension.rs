// src/filtering/extension.rs

/// Extension of Jupyter notebooks.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Extensions (lowercase, no dot) of files worth sampling as source code.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    // --- Web ---
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "vue", "svelte",
    // --- Systems ---
    "rs", "go", "c", "h", "cc", "cpp", "cxx", "hpp", "hh", "zig", "nim",
    // --- JVM / .NET ---
    "java", "kt", "kts", "scala", "groovy", "cs", "fs",
    // --- Scripting ---
    "py", "rb", "php", "lua", "pl", "sh", "bash", "zsh", "ps1",
    // --- Mobile ---
    "swift", "m", "mm", "dart",
    // --- Functional ---
    "ex", "exs", "erl", "hs", "clj", "ml", "elm",
    // --- Data / scientific ---
    "r", "jl", "sql",
    // --- Smart contracts ---
    "sol",
];

/// Returns the lowercase extension of the last path segment, if any.
///
/// Dotfiles without a further dot (e.g. `.env`) have no extension.
///
/// # Examples
///
/// ```
/// use readmeify::filtering::file_extension;
///
/// assert_eq!(file_extension("src/Main.RS").as_deref(), Some("rs"));
/// assert_eq!(file_extension("Makefile"), None);
/// assert_eq!(file_extension("config/.env"), None);
/// assert_eq!(file_extension("web/app.min.js").as_deref(), Some("js"));
/// ```
pub fn file_extension(path: &str) -> Option<String> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let stem_and_ext = file_name.strip_prefix('.').unwrap_or(file_name);
    stem_and_ext
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
}

/// Checks if an extension (lowercase, no dot) is in the source allow-list.
pub fn is_source_extension(ext: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&ext)
}
