// src/convert/pipeline.rs

use tracing::debug;

use crate::convert::normalize::normalize_path;
use crate::convert::render::render;
use crate::types::{ConversionResult, FormatTag};

/// Normalize `raw` once and render it into every format, in emission order.
///
/// Returns an empty list iff `raw` is empty or whitespace-only; otherwise
/// exactly one result per [`FormatTag::ALL`] entry.
pub fn convert_path(raw: &str) -> Vec<ConversionResult> {
    convert_path_with(raw, &FormatTag::ALL)
}

/// Like [`convert_path`], but only for the formats listed in `formats`.
///
/// Results always come out in emission order and at most once per format,
/// regardless of how `formats` is ordered or whether it repeats itself.
pub fn convert_path_with(raw: &str, formats: &[FormatTag]) -> Vec<ConversionResult> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let canonical = normalize_path(raw);
    debug!(input = raw, %canonical, ?formats, "converting path");

    FormatTag::ALL
        .into_iter()
        .filter(|tag| formats.contains(tag))
        .map(|tag| ConversionResult::new(tag, render(tag, &canonical)))
        .collect()
}

/// Join results as `Label: value` lines, the "copy all" text.
pub fn results_as_text(results: &[ConversionResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}: {}", r.label, r.value))
        .collect::<Vec<_>>()
        .join("\n")
}
