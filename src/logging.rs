//! Structured JSON-lines logging.
//!
//! One line per event on stdout: timestamp, level, domain, event name, and
//! free-form fields. Level is read once from `LOG_LEVEL`.

use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::OnceLock;

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

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

/// Categories for filtering log streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Fetch,  // document retrieval
    Source, // parsing and projection
    Render, // container rebuilds
    View,   // commands, filter and detail state
    Store,  // preference persistence
    System, // startup, shutdown
}

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Fetch => "fetch",
            Domain::Source => "source",
            Domain::Render => "render",
            Domain::View => "view",
            Domain::Store => "store",
            Domain::System => "system",
        }
    }
}

fn min_level() -> Level {
    static LEVEL: OnceLock<Level> = OnceLock::new();
    *LEVEL.get_or_init(Level::from_env)
}

pub fn json_log(level: Level, domain: Domain, event: &str, fields: Value) {
    if level < min_level() {
        return;
    }
    let mut line = Map::new();
    line.insert("ts".to_string(), Value::String(Utc::now().to_rfc3339()));
    line.insert("level".to_string(), Value::String(level.as_str().to_string()));
    line.insert(
        "domain".to_string(),
        Value::String(domain.as_str().to_string()),
    );
    line.insert("event".to_string(), Value::String(event.to_string()));
    if let Value::Object(extra) = fields {
        for (k, v) in extra {
            line.insert(k, v);
        }
    }
    println!("{}", Value::Object(line));
}

pub fn obj(pairs: &[(&str, Value)]) -> Value {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert((*k).to_string(), v.clone());
    }
    Value::Object(m)
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: u64) -> Value {
    Value::Number(n.into())
}
