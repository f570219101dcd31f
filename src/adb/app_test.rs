use crate::adb::app::{focus_line, parse_packages, require_pid, uid_line};
use crate::error::AdbError;
use crate::testing::fixtures;

#[test]
fn package_prefix_is_stripped() {
    let packages = parse_packages(fixtures::PM_LIST_PACKAGES);
    assert_eq!(
        packages,
        vec!["com.example.app", "com.android.chrome", "org.mozilla.firefox"]
    );
}

#[test]
fn unrelated_lines_yield_no_packages() {
    assert!(parse_packages("Error: no devices/emulators found").is_empty());
}

#[test]
fn focus_line_finds_the_current_window() {
    let line = focus_line(fixtures::DUMPSYS_WINDOW).expect("focus line");
    assert!(line.contains("mCurrentFocus"));
    assert!(line.contains("com.example.app"));
}

#[test]
fn focus_line_misses_when_no_marker_present() {
    assert_eq!(focus_line("nothing interesting here"), None);
}

#[test]
fn uid_line_finds_the_user_id() {
    let line = uid_line(fixtures::DUMPSYS_PACKAGE).expect("uid line");
    assert_eq!(line, "userId=10123");
}

#[test]
fn empty_pid_fails_before_any_logcat_invocation() {
    let err = require_pid("com.example.app", "  \n").unwrap_err();
    match err {
        AdbError::AppNotRunning { package } => assert_eq!(package, "com.example.app"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err_message_names_package());
}

fn err_message_names_package() -> bool {
    let err = require_pid("com.example.app", "").unwrap_err();
    err.to_string().contains("com.example.app")
}

#[test]
fn a_real_pid_is_trimmed_and_returned() {
    assert_eq!(require_pid("com.example.app", " 4711\n").unwrap(), "4711");
}
