// src/convert/normalize.rs

use tracing::trace;

use crate::convert::{FILE_URL_PREFIX, PYTHON_RAW_LITERAL, UNC_PREFIX};

/// Strip one layer of literal decoration from a raw path string.
///
/// Steps, in order:
/// 1. trim surrounding whitespace;
/// 2. unwrap a whole Python raw literal (`r"..."` / `r'...'`), or else
/// 3. drop one matching pair of surrounding `"` or `'`;
/// 4. drop a leading `file:///`.
///
/// UNC paths (`\\server\share`) come out of step 4 untouched. Slash
/// direction is never changed here. Any string is accepted, including the
/// empty string.
pub fn normalize_path(raw: &str) -> String {
    let mut normalized = raw.trim();

    if let Some(caps) = PYTHON_RAW_LITERAL.captures(normalized) {
        normalized = caps.get(1).map_or("", |m| m.as_str());
    } else if let Some(inner) = strip_quote_pair(normalized) {
        normalized = inner;
    }

    if let Some(rest) = normalized.strip_prefix(FILE_URL_PREFIX) {
        normalized = rest;
    }

    trace!(
        input = raw,
        output = normalized,
        unc = normalized.starts_with(UNC_PREFIX),
        "normalized path"
    );
    normalized.to_string()
}

/// Remove exactly one matching pair of surrounding quotes, if present.
fn strip_quote_pair(s: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| s.strip_prefix(quote)?.strip_suffix(quote))
}
