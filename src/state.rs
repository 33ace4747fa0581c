use serde::{Deserialize, Serialize};

use crate::clock;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base: String,
    pub http_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("API_BASE").unwrap_or_else(|_| "http://localhost:8000".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(30),
            max_retries: std::env::var("MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(2),
            retry_base_delay_ms: std::env::var("RETRY_BASE_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(200),
            retry_max_delay_ms: std::env::var("RETRY_MAX_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
        }
    }
}

/// One of the four nested time scales forming the drill-down hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    Month,
    Day,
    Hour,
}

impl Granularity {
    /// Next finer scale; `None` at the hour leaf.
    pub fn next(self) -> Option<Granularity> {
        match self {
            Granularity::Year => Some(Granularity::Month),
            Granularity::Month => Some(Granularity::Day),
            Granularity::Day => Some(Granularity::Hour),
            Granularity::Hour => None,
        }
    }

    /// Next coarser scale; `None` at the year root.
    pub fn prev(self) -> Option<Granularity> {
        match self {
            Granularity::Year => None,
            Granularity::Month => Some(Granularity::Year),
            Granularity::Day => Some(Granularity::Month),
            Granularity::Hour => Some(Granularity::Day),
        }
    }

    /// Pillar slots shown at this scale. Strictly cumulative: each finer
    /// scale adds exactly one slot to the coarser scale's set.
    pub fn pillar_slots(self) -> &'static [PillarSlot] {
        use PillarSlot::*;
        match self {
            Granularity::Year => &[BigLuck, Year],
            Granularity::Month => &[BigLuck, Year, Month],
            Granularity::Day => &[BigLuck, Year, Month, Day],
            Granularity::Hour => &[BigLuck, Year, Month, Day, Hour],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
            Granularity::Day => "day",
            Granularity::Hour => "hour",
        }
    }
}

/// Pillar slot within a cell. `BigLuck` is the outermost multi-year slot and
/// appears at every granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarSlot {
    BigLuck,
    Year,
    Month,
    Day,
    Hour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Solar,
    Lunar,
}

/// Birth moment being explored. Created once per generate action from
/// presence-validated form input; replaced wholesale on the next generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub gender: Gender,
    pub calendar: Calendar,
    pub birth_date: String,
    pub birth_time: String,
    pub is_leap_month: bool,
}

/// Session navigation state: the active granularity plus the pinned time
/// coordinates. Mutated exclusively by the reducer, synchronously, before any
/// fetch suspension point.
#[derive(Debug, Clone)]
pub struct NavState {
    pub view: Granularity,
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub birth: Option<BirthProfile>,
}

impl NavState {
    /// Fresh session at the year view, pinned to the current UTC+8 year.
    pub fn new() -> Self {
        use chrono::Datelike;
        Self {
            view: Granularity::Year,
            year: clock::china_now().year(),
            month: None,
            day: None,
            birth: None,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}
