use chrono::{DateTime, NaiveDateTime, ParseError, Utc};

/// Current instant as naive UTC, the reference all remote timestamps are
/// normalised to.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parses a Sonarr timestamp into naive UTC.
///
/// Values carrying an offset (`Z`, `+02:00`) are converted to UTC first and
/// only then stripped of their timezone, so the instant is preserved. Values
/// without an offset are taken as UTC already.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ParseError> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.with_timezone(&Utc).naive_utc()),
        Err(_) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"),
    }
}

/// Builds the `title|S<season>` key.
///
/// The title is trimmed and line breaks become spaces, so the key reads
/// back unchanged from the line-oriented alert log.
pub fn dedup_key(title: &str, season: u32) -> String {
    let title = title.trim().replace(['\r', '\n'], " ");
    format!("{}|S{}", title, season)
}

/// Splits a dedup key back into show title and season for display.
///
/// Keys that do not follow the `title|S<season>` shape are returned whole
/// with an empty season.
pub fn split_dedup_key(key: &str) -> (String, String) {
    match key.rsplit_once("|S") {
        Some((title, season)) if !season.is_empty() && season.chars().all(|c| c.is_ascii_digit()) => {
            (title.to_string(), season.to_string())
        }
        _ => (key.to_string(), String::new()),
    }
}

/// Formats an airing instant as e.g. `Friday 23 October`.
pub fn format_airing(airing: NaiveDateTime) -> String {
    airing.format("%A %d %B").to_string()
}

pub fn days_label(days_until: i64) -> String {
    match days_until {
        0 => "TODAY!".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {} days", n),
    }
}
