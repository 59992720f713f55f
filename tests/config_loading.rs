// tests/config_loading.rs

use std::error::Error;
use std::io::Write;

use pathbender::config::{ConfigFile, load_and_validate, load_or_default};
use pathbender::errors::PathBenderError;
use pathbender::types::{FormatTag, OutputStyle, Shell};
use pathbender_test_utils::builders::ConfigFileBuilder;
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_config_is_loaded() -> TestResult {
    let file = write_config(
        r#"
[output]
style = "json"
formats = ["url", "windows"]

[escape]
shell = "powershell"
"#,
    );

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.output_style(), OutputStyle::Json);
    assert_eq!(cfg.formats(), &[FormatTag::Url, FormatTag::Windows]);
    assert_eq!(cfg.shell(), Shell::PowerShell);
    Ok(())
}

#[test]
fn empty_file_gives_defaults() -> TestResult {
    let file = write_config("");
    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg, ConfigFile::default());
    assert_eq!(cfg.formats(), FormatTag::ALL);
    Ok(())
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    match load_or_default(Some(missing.as_path())) {
        Err(PathBenderError::IoError(_)) => {}
        Err(e) => panic!("Expected IoError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_format_tag_is_a_toml_error() {
    let file = write_config(
        r#"
[output]
formats = ["windows", "fortran"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(PathBenderError::TomlError(e)) => {
            assert!(e.to_string().contains("fortran"));
        }
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_key_is_a_toml_error() {
    let file = write_config(
        r#"
[escape]
shel = "cmd"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(PathBenderError::TomlError(_))
    ));
}

#[test]
fn duplicate_formats_return_config_error() {
    let file = write_config(
        r#"
[output]
formats = ["linux", "linux"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(PathBenderError::ConfigError(msg)) => {
            assert!(msg.contains("more than once"));
            assert!(msg.contains("linux"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn builder_matches_toml() -> TestResult {
    let file = write_config(
        r#"
[output]
formats = ["json"]

[escape]
shell = "cmd"
"#,
    );

    let built = ConfigFileBuilder::new()
        .with_format(FormatTag::Json)
        .with_shell(Shell::Cmd)
        .build();
    assert_eq!(load_and_validate(file.path())?, built);
    Ok(())
}
