use crate::adb::sysinfo::{parse_battery, parse_meminfo, parse_storage};
use crate::testing::fixtures;

#[test]
fn battery_pairs_are_trimmed_and_the_banner_is_skipped() {
    let info = parse_battery(fixtures::DUMPSYS_BATTERY);
    assert_eq!(info.get("level").map(String::as_str), Some("93"));
    assert_eq!(info.get("USB powered").map(String::as_str), Some("true"));
    assert_eq!(info.get("technology").map(String::as_str), Some("Li-ion"));
    assert!(!info.keys().any(|k| k.contains("Battery Service")));
}

#[test]
fn meminfo_values_keep_their_unit() {
    let info = parse_meminfo(fixtures::PROC_MEMINFO);
    assert_eq!(info.get("MemTotal").map(String::as_str), Some("5917096 kB"));
    assert_eq!(info.len(), 4);
}

#[test]
fn storage_rows_skip_the_header_and_short_lines() {
    let entries = parse_storage(fixtures::DF_H);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].filesystem, "/dev/block/dm-0");
    assert_eq!(entries[0].use_percent, "99%");
    assert_eq!(entries[0].mounted_on, "/");
    assert_eq!(entries[2].mounted_on, "/storage/emulated");
}

#[test]
fn reparsing_yields_identical_tables() {
    assert_eq!(parse_storage(fixtures::DF_H), parse_storage(fixtures::DF_H));
    assert_eq!(
        parse_battery(fixtures::DUMPSYS_BATTERY),
        parse_battery(fixtures::DUMPSYS_BATTERY)
    );
}
