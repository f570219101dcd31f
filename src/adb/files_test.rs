use crate::adb::files::parse_listing;
use crate::testing::fixtures;

#[test]
fn header_and_malformed_rows_are_dropped() {
    let entries = parse_listing(fixtures::LS_LA);
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|e| !e.name.is_empty()));
}

#[test]
fn month_name_dates_span_three_tokens() {
    let entries = parse_listing("total 12\n-rw-r--r-- 1 root root 4096 Jan 1 00:00 file.txt");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "file.txt");
    assert_eq!(entries[0].size, "4096");
    assert_eq!(entries[0].date, "Jan 1 00:00");
}

#[test]
fn iso_dates_span_two_tokens() {
    let entries = parse_listing("-rw-rw---- 1 root sdcard_rw 1024 2024-01-05 10:20 notes.txt");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, "2024-01-05 10:20");
    assert_eq!(entries[0].owner, "root");
    assert_eq!(entries[0].group, "sdcard_rw");
}

#[test]
fn names_with_spaces_are_joined() {
    let entries = parse_listing(fixtures::LS_LA);
    let notes = entries
        .iter()
        .find(|e| e.name.contains("notes"))
        .expect("notes entry");
    assert_eq!(notes.name, "my notes.txt");
}

#[test]
fn symlink_targets_stay_part_of_the_name() {
    let entries = parse_listing(fixtures::LS_LA);
    let link = entries
        .iter()
        .find(|e| e.permissions.starts_with('l'))
        .expect("symlink entry");
    assert_eq!(link.name, "sdcard -> /storage/self/primary");
}

#[test]
fn reparsing_yields_identical_entries() {
    assert_eq!(
        parse_listing(fixtures::LS_LA),
        parse_listing(fixtures::LS_LA)
    );
}
