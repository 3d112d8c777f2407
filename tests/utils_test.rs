use chrono::NaiveDate;
use seasoncli::utils::*;

#[test]
fn test_parse_timestamp_utc() {
    let parsed = parse_timestamp("2026-10-22T01:00:00Z").unwrap();
    let expected = NaiveDate::from_ymd_opt(2026, 10, 22)
        .unwrap()
        .and_hms_opt(1, 0, 0)
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_timestamp_converts_offset_before_dropping_it() {
    let parsed = parse_timestamp("2026-10-22T01:00:00-05:00").unwrap();
    let expected = NaiveDate::from_ymd_opt(2026, 10, 22)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_timestamp_without_offset_and_fraction() {
    let parsed = parse_timestamp("2026-10-22T01:00:00.250").unwrap();
    let expected = NaiveDate::from_ymd_opt(2026, 10, 22)
        .unwrap()
        .and_hms_milli_opt(1, 0, 0, 250)
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("next tuesday").is_err());
    assert!(parse_timestamp("").is_err());
}

#[test]
fn test_dedup_key() {
    assert_eq!(dedup_key("Alpha", 4), "Alpha|S4");
    assert_eq!(dedup_key("Law & Order: SVU", 26), "Law & Order: SVU|S26");
}

#[test]
fn test_dedup_key_fits_on_one_line() {
    assert_eq!(dedup_key("  Alpha ", 4), "Alpha|S4");
    assert_eq!(dedup_key("Alpha\r\nReturns\n", 2), "Alpha  Returns|S2");
}

#[test]
fn test_split_dedup_key() {
    assert_eq!(
        split_dedup_key("Alpha|S4"),
        ("Alpha".to_string(), "4".to_string())
    );
    assert_eq!(
        split_dedup_key("A|Show|S12"),
        ("A|Show".to_string(), "12".to_string())
    );
    assert_eq!(
        split_dedup_key("not a key"),
        ("not a key".to_string(), String::new())
    );
}

#[test]
fn test_format_airing() {
    let airing = NaiveDate::from_ymd_opt(2026, 10, 22)
        .unwrap()
        .and_hms_opt(1, 0, 0)
        .unwrap();
    assert_eq!(format_airing(airing), "Thursday 22 October");
}

#[test]
fn test_days_label() {
    assert_eq!(days_label(0), "TODAY!");
    assert_eq!(days_label(1), "in 1 day");
    assert_eq!(days_label(12), "in 12 days");
}
