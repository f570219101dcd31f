use crate::adb::forward::parse_forward_list;
use crate::testing::fixtures;

#[test]
fn forward_rows_are_split_into_three_fields() {
    let entries = parse_forward_list(fixtures::FORWARD_LIST);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].serial, "emulator-5554");
    assert_eq!(entries[0].local, "tcp:8080");
    assert_eq!(entries[0].remote, "tcp:8081");
    assert_eq!(entries[1].remote, "localabstract:chrome_devtools_remote");
}

#[test]
fn blank_and_short_lines_are_dropped() {
    assert!(parse_forward_list("\n\ntcp:8080\n").is_empty());
}
