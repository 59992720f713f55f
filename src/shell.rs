// src/shell.rs

//! Quoting a path so it survives as a single argument on a command line.

use crate::types::Shell;

/// Characters bash needs backslash-escaped.
const BASH_SPECIAL: [char; 13] = [' ', '(', ')', '&', '|', ';', '<', '>', '$', '`', '"', '\'', '\\'];

/// Characters that force PowerShell quoting.
const POWERSHELL_SPECIAL: [char; 12] = [' ', '(', ')', '&', '|', ';', '<', '>', '$', '`', '"', '\''];

/// Characters that force cmd.exe quoting.
const CMD_SPECIAL: [char; 10] = [' ', '(', ')', '&', '|', ';', '<', '>', '^', '"'];

/// Escape `path` for use as a single argument in `shell`.
///
/// - bash: each special character gets a backslash in front of it.
/// - powershell / cmd: if any special character is present, the whole path
///   is wrapped in double quotes with embedded `"` doubled; otherwise it is
///   returned unchanged.
pub fn escape_for_shell(path: &str, shell: Shell) -> String {
    match shell {
        Shell::Bash => {
            let mut escaped = String::with_capacity(path.len());
            for c in path.chars() {
                if BASH_SPECIAL.contains(&c) {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped
        }
        Shell::PowerShell => quote_if_needed(path, &POWERSHELL_SPECIAL),
        Shell::Cmd => quote_if_needed(path, &CMD_SPECIAL),
    }
}

fn quote_if_needed(path: &str, special: &[char]) -> String {
    if path.contains(special) {
        format!("\"{}\"", path.replace('"', "\"\""))
    } else {
        path.to_string()
    }
}
