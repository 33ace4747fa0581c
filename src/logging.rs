//! Structured logging for the drill-down client.
//!
//! JSON lines on stderr, one object per event, with a monotonic sequence
//! number for replaying a session's fetch/render ordering. Display output
//! goes through the render surface; logging never writes to stdout.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL").as_deref() {
            Ok("debug") => Level::Debug,
            Ok("warn") => Level::Warn,
            Ok("error") => Level::Error,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

static SEQ: AtomicU64 = AtomicU64::new(0);
static MIN_LEVEL: AtomicU64 = AtomicU64::new(Level::Info as u64);

pub fn init(level: Level) {
    MIN_LEVEL.store(level as u64, Ordering::Relaxed);
}

pub fn log_at(level: Level, event: &str, fields: Map<String, Value>) {
    if (level as u64) < MIN_LEVEL.load(Ordering::Relaxed) {
        return;
    }
    let mut entry = Map::new();
    entry.insert("ts".to_string(), json!(Utc::now().to_rfc3339()));
    entry.insert("seq".to_string(), json!(SEQ.fetch_add(1, Ordering::Relaxed)));
    entry.insert("lvl".to_string(), json!(level.as_str()));
    entry.insert("event".to_string(), json!(event));
    for (k, v) in fields {
        entry.insert(k, v);
    }
    eprintln!("{}", Value::Object(entry));
}

pub fn json_log(event: &str, fields: Map<String, Value>) {
    log_at(Level::Info, event, fields);
}

pub fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), v.clone());
    }
    map
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: f64) -> Value {
    json!(n)
}
