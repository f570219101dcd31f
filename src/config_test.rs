use crate::config::Config;

#[test]
fn empty_file_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert!(config.adb_path.is_none());
    assert!(config.screenshot_dir().is_none());
}

#[test]
fn adb_path_and_screenshot_output_round_trip() {
    let contents = r#"
adb_path = "/opt/platform-tools/adb"

[screenshot]
output = "/tmp/captures"
"#;
    let config = Config::parse(contents).unwrap();
    assert_eq!(
        config.adb_path.as_deref(),
        Some("/opt/platform-tools/adb")
    );
    assert_eq!(
        config.screenshot_dir(),
        Some(std::path::PathBuf::from("/tmp/captures"))
    );
}

#[test]
fn tilde_in_screenshot_output_is_expanded() {
    let contents = r#"
[screenshot]
output = "~/captures"
"#;
    let config = Config::parse(contents).unwrap();
    let dir = config.screenshot_dir().unwrap();
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with("captures"));
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(Config::parse("this is not valid toml").is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let config = Config::parse("future_knob = 3\n").unwrap();
    assert!(config.adb_path.is_none());
}
