// src/convert/detect.rs

use tracing::trace;

use crate::convert::{DRIVE_ROOT, FILE_URL_PREFIX, PYTHON_RAW_LITERAL, UNC_PREFIX};
use crate::types::FormatTag;

/// Guess which representation `raw` is written in.
///
/// Patterns are tried in a fixed priority order and the first hit wins:
/// drive root (`C:\`), leading `/`, Python raw literal, `file:///`, then UNC.
/// The input is inspected as given (no trimming).
pub fn detect_format(raw: &str) -> Option<FormatTag> {
    let tag = if DRIVE_ROOT.is_match(raw) {
        Some(FormatTag::Windows)
    } else if raw.starts_with('/') {
        Some(FormatTag::Linux)
    } else if PYTHON_RAW_LITERAL.is_match(raw) {
        Some(FormatTag::PythonRaw)
    } else if raw.starts_with(FILE_URL_PREFIX) {
        Some(FormatTag::Url)
    } else if raw.starts_with(UNC_PREFIX) {
        Some(FormatTag::Unc)
    } else {
        None
    };

    trace!(input = raw, ?tag, "detected path format");
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_known_shape() {
        assert_eq!(detect_format(r"C:\Users\John"), Some(FormatTag::Windows));
        assert_eq!(detect_format("/home/john/file"), Some(FormatTag::Linux));
        assert_eq!(detect_format(r#"r"C:\tmp""#), Some(FormatTag::PythonRaw));
        assert_eq!(detect_format("r'data.csv'"), Some(FormatTag::PythonRaw));
        assert_eq!(detect_format("file:///C:/Users"), Some(FormatTag::Url));
        assert_eq!(detect_format(r"\\server\share"), Some(FormatTag::Unc));
    }

    #[test]
    fn unmatched_input_is_none() {
        assert_eq!(detect_format("notapath"), None);
        assert_eq!(detect_format(""), None);
        // Drive letter without a backslash is not enough.
        assert_eq!(detect_format("C:/Users"), None);
        assert_eq!(detect_format("file://host/share"), None);
    }

    #[test]
    fn priority_order_is_respected() {
        // Leading slash wins before anything else is considered.
        assert_eq!(detect_format("/r'x'"), Some(FormatTag::Linux));
        // A single backslash is neither linux nor unc.
        assert_eq!(detect_format(r"\temp"), None);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(detect_format("  /home/john"), None);
    }
}
