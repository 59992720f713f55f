// src/convert/mod.rs

//! The path conversion engine.
//!
//! Everything here is a pure function over `&str`:
//! - `detect`: guess which representation a raw string is in.
//! - `normalize`: strip one layer of literal decoration.
//! - `render`: per-format renderers over a canonical path.
//! - `pipeline`: normalize once, render every (or a chosen) format.

pub mod detect;
pub mod normalize;
pub mod pipeline;
pub mod render;

use std::sync::LazyLock;

use regex::Regex;

pub use detect::detect_format;
pub use normalize::normalize_path;
pub use pipeline::{convert_path, convert_path_with, results_as_text};
pub use render::render;

/// Scheme prefix stripped by the normalizer and recognised by the detector.
pub(crate) const FILE_URL_PREFIX: &str = "file:///";

/// Two leading backslashes mark a UNC path.
pub(crate) const UNC_PREFIX: &str = "\\\\";

/// `C:` at the very start.
pub(crate) static DRIVE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]:").expect("drive letter regex is valid"));

/// `C:\` at the very start.
pub(crate) static DRIVE_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]:\\").expect("drive root regex is valid"));

/// `/c/` at the very start (mount-style drive reference).
pub(crate) static MOUNT_DRIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[a-zA-Z]/").expect("mount drive regex is valid"));

/// A whole Python raw-string literal, `r"..."` or `r'...'`.
pub(crate) static PYTHON_RAW_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^r["'](.*)["']$"#).expect("python raw literal regex is valid")
});
