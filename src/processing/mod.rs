//! Turns fetched blobs into snippet text.
//!
//! This module reverses the transport encoding of fetched files, truncates
//! text to per-category character caps, and flattens notebooks into linear
//! text. Everything here is pure; fetching lives in [`crate::github`].

mod decode;
pub mod notebook;
mod truncate;

pub use decode::{decode_content, decode_remote_file, encode_content};
pub use notebook::{extract_notebook, Extraction, NotebookOptions};
pub use truncate::{char_len, truncate_chars};
