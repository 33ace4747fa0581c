//! Time coordinate normalization for the fixed UTC+8 analysis timezone.
//!
//! The remote engine stamps every cell with an ISO-8601 datetime in China
//! standard time. Navigation only ever needs the year/month/day/hour prefix,
//! so parsing is a strict prefix match rather than a full datetime parse.

use chrono::{DateTime, FixedOffset, Utc};

const CHINA_OFFSET_SECS: i32 = 8 * 3600;

/// Structural time coordinates extracted from a cell timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

/// Current wall-clock moment in fixed UTC+8, regardless of host timezone.
pub fn china_now() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(CHINA_OFFSET_SECS)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    Utc::now().with_timezone(&offset)
}

/// Extract `{year, month, day, hour}` from a `YYYY-MM-DDTHH` prefix.
///
/// Returns `None` when the prefix does not match; callers treat that as a
/// non-fatal input error and leave navigation state untouched.
pub fn parse_moment(iso: &str) -> Option<Moment> {
    let bytes = iso.as_bytes();
    if bytes.len() < 13 {
        return None;
    }
    if bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b'T' {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<&str> {
        let s = iso.get(range)?;
        s.bytes().all(|b| b.is_ascii_digit()).then_some(s)
    };
    Some(Moment {
        year: digits(0..4)?.parse().ok()?,
        month: digits(5..7)?.parse().ok()?,
        day: digits(8..10)?.parse().ok()?,
        hour: digits(11..13)?.parse().ok()?,
    })
}
