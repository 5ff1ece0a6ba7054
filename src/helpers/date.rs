//! Date helper functions

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Parse a date string in the formats posts use.
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    None
}

/// Format a post date for display, e.g. "February 14, 2025". Unparseable
/// dates come back verbatim.
pub fn full_date(date_str: &str) -> String {
    match parse_date_string(date_str) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Today in the sortable format posts default to
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
