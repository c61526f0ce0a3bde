use super::*;
use chrono::{TimeZone, Timelike};

#[test]
fn test_data_folder_constant() {
    assert_eq!(DATA_FOLDER, ".issue-tracker");
}

#[test]
fn test_data_dir_ends_with_data_folder() {
    assert!(data_dir().ends_with(DATA_FOLDER));
}

#[test]
fn test_now_is_truncated_to_millis() {
    let ts = now();
    assert_eq!(ts.nanosecond() % 1_000_000, 0);
}

#[test]
fn test_format_iso_shape() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    assert_eq!(format_iso(&at), "2024-05-01T12:00:00.000Z");
}

#[test]
fn test_now_iso_format() {
    let timestamp = now_iso();

    // Should be a valid RFC3339 timestamp
    assert!(timestamp.ends_with('Z'), "Should be UTC with Z suffix");
    assert!(timestamp.contains('.'), "Should carry milliseconds");

    let parsed = chrono::DateTime::parse_from_rfc3339(&timestamp);
    assert!(parsed.is_ok(), "Should be valid RFC3339 format");
}

#[test]
fn test_iso_strings_sort_chronologically() {
    let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 9, 59, 59).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    assert!(format_iso(&earlier) < format_iso(&later));
}
