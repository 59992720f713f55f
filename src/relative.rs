// src/relative.rs

use tracing::debug;

use crate::convert::normalize_path;

/// Relative path from `from` to `to`, with forward slashes.
///
/// `from` is taken to name a *file*: its last segment is not a directory to
/// climb out of. Both inputs are normalized first and may use either slash
/// direction. The result always starts with `./` or `../`; identical paths
/// give `./`.
pub fn calculate_relative_path(from: &str, to: &str) -> String {
    let from = normalize_path(from).replace('\\', "/");
    let to = normalize_path(to).replace('\\', "/");

    let from_segments = segments(&from);
    let to_segments = segments(&to);

    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    // Clamped at zero when `to` shares every segment of `from`.
    let up_levels = from_segments.len().saturating_sub(common + 1);

    let mut relative = "../".repeat(up_levels);
    relative.push_str(&to_segments[common..].join("/"));

    debug!(%from, %to, common, up_levels, %relative, "calculated relative path");

    if relative.is_empty() {
        return "./".to_string();
    }
    if !relative.starts_with("../") {
        relative.insert_str(0, "./");
    }
    relative
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_directory_from_a_file() {
        assert_eq!(
            calculate_relative_path(
                r"C:\Users\John\Documents\notes.txt",
                r"C:\Users\John\Pictures\photo.jpg"
            ),
            "../Pictures/photo.jpg"
        );
    }

    #[test]
    fn last_from_segment_is_treated_as_a_file() {
        assert_eq!(
            calculate_relative_path(
                r"C:\Users\John\Documents",
                r"C:\Users\John\Pictures\photo.jpg"
            ),
            "./Pictures/photo.jpg"
        );
    }

    #[test]
    fn climbs_several_levels() {
        assert_eq!(
            calculate_relative_path("/a/b/c/d/file.rs", "/a/x/y.rs"),
            "../../../x/y.rs"
        );
    }

    #[test]
    fn identical_paths_give_dot_slash() {
        assert_eq!(calculate_relative_path("/a/b", "/a/b"), "./");
        assert_eq!(calculate_relative_path(r"C:\a", "\"C:/a\""), "./");
    }

    #[test]
    fn ancestor_target_clamps_up_levels() {
        // `to` is a parent of `from`'s file: nothing to climb, nothing to add.
        assert_eq!(calculate_relative_path("/a/b/c", "/a/b"), "./");
        // `to` below `from`: more common segments than `from` has minus one.
        assert_eq!(calculate_relative_path("/a/b", "/a/b/c/d"), "./c/d");
    }

    #[test]
    fn mixed_separators_and_decoration() {
        assert_eq!(
            calculate_relative_path("file:///home/u/src/main.rs", r#"r"/home/u/docs/x.md""#),
            "../docs/x.md"
        );
    }

    #[test]
    fn empty_inputs_do_not_panic() {
        assert_eq!(calculate_relative_path("", ""), "./");
        assert_eq!(calculate_relative_path("", "/a"), "./a");
        assert_eq!(calculate_relative_path("/a/b", ""), "../");
    }
}
