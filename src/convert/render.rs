// src/convert/render.rs

//! Per-format renderers.
//!
//! Every renderer takes a canonical path (see [`crate::convert::normalize_path`])
//! and returns a new string. None of them can fail; unexpected input just
//! produces a deterministic, possibly meaningless, string.

use crate::convert::{DRIVE_LETTER, MOUNT_DRIVE, UNC_PREFIX};
use crate::types::FormatTag;

/// Render `canonical` into the representation named by `tag`.
pub fn render(tag: FormatTag, canonical: &str) -> String {
    match tag {
        FormatTag::Windows => to_windows(canonical),
        FormatTag::Linux => to_linux(canonical),
        FormatTag::PythonRaw => to_python_raw(canonical),
        FormatTag::PythonForward => to_python_forward(canonical),
        FormatTag::Javascript => to_javascript(canonical),
        FormatTag::Json => to_json(canonical),
        FormatTag::Unc => to_unc(canonical),
        FormatTag::Url => to_url(canonical),
    }
}

/// Backslash form. A mount-style `/c/...` prefix becomes `c:\...`.
pub fn to_windows(canonical: &str) -> String {
    let result = canonical.replace('/', "\\");

    if MOUNT_DRIVE.is_match(canonical) {
        // `\c\Users` -> `c\Users` -> `c:\Users`
        return result[1..].replacen('\\', ":\\", 1);
    }

    result
}

/// Forward-slash form. A leading drive letter becomes `/mnt/<drive>`.
pub fn to_linux(canonical: &str) -> String {
    let result = canonical.replace('\\', "/");

    if DRIVE_LETTER.is_match(&result) {
        let drive = result[..1].to_ascii_lowercase();
        return format!("/mnt/{drive}{}", &result[2..]);
    }

    result
}

/// `r"<windows>"`; raw-string semantics mean no escaping is needed.
pub fn to_python_raw(canonical: &str) -> String {
    format!("r\"{}\"", to_windows(canonical))
}

/// `"<linux>"`; the Linux form never contains backslashes.
pub fn to_python_forward(canonical: &str) -> String {
    format!("\"{}\"", to_linux(canonical))
}

/// Windows form with every backslash doubled, in double quotes.
pub fn to_javascript(canonical: &str) -> String {
    format!("\"{}\"", to_windows(canonical).replace('\\', "\\\\"))
}

/// Windows form with every backslash quadrupled, in double quotes.
///
/// Four, not two: the output is meant to survive being embedded in an
/// already-escaped string. It is therefore not a strict JSON literal for
/// the bare path.
pub fn to_json(canonical: &str) -> String {
    format!("\"{}\"", to_windows(canonical).replace('\\', "\\\\\\\\"))
}

/// UNC network form, routed through `\\localhost` for local paths.
pub fn to_unc(canonical: &str) -> String {
    let unc = canonical.replace('/', "\\");

    if unc.starts_with(UNC_PREFIX) {
        return unc;
    }

    if DRIVE_LETTER.is_match(&unc) {
        let drive = unc[..1].to_ascii_uppercase();
        return format!("\\\\localhost\\{drive}${}", &unc[2..]);
    }

    if unc.starts_with('\\') {
        return format!("\\\\localhost\\root{unc}");
    }

    format!("\\\\localhost\\{unc}")
}

/// `file://` URL built from the Windows form.
pub fn to_url(canonical: &str) -> String {
    let mut url_path = to_windows(canonical).replace('\\', "/");

    if !url_path.starts_with('/') {
        url_path.insert(0, '/');
    }

    format!("file://{url_path}")
}
