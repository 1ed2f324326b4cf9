//! Optional append-only JSON-lines log of handled events.
//!
//! One object per line. Write failures turn the log off and are reported once
//! by the runner after the terminal is restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord<'a> {
    pub seq: u64,
    pub event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bug_id: Option<&'a str>,
    pub screen: &'a str,
    pub game: GameRecord<'a>,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord<'a> {
    pub has_won: bool,
    pub show_feedback: bool,
    pub found: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bug_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct EventLog {
    out: Option<BufWriter<File>>,
    line: Vec<u8>,
    error: Option<String>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            line: Vec::with_capacity(256),
            error: None,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Why the log was turned off, if a write failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn record(&mut self, rec: &EventRecord<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.line.clear();
        if let Err(e) = serde_json::to_writer(&mut self.line, rec) {
            self.error = Some(e.to_string());
            self.out = None;
            return;
        }
        self.line.push(b'\n');

        let written = out.write_all(&self.line).and_then(|_| out.flush());
        if let Err(e) = written {
            self.error = Some(e.to_string());
            self.out = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_log_ignores_records() {
        let mut log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.record(&EventRecord {
            seq: 1,
            event: "back",
            bug_id: None,
            screen: "game",
            game: GameRecord {
                has_won: false,
                show_feedback: false,
                found: Vec::new(),
                current_bug_id: None,
                feedback: None,
            },
            page: 0,
        });
        assert_eq!(log.error(), None);
    }

    #[test]
    fn record_serializes_compactly() {
        let rec = EventRecord {
            seq: 3,
            event: "select",
            bug_id: Some("MITE"),
            screen: "game",
            game: GameRecord {
                has_won: false,
                show_feedback: true,
                found: vec!["MITE"],
                current_bug_id: Some("MITE"),
                feedback: Some("correct"),
            },
            page: 0,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"seq":3,"event":"select","bug_id":"MITE","screen":"game","game":{"has_won":false,"show_feedback":true,"found":["MITE"],"current_bug_id":"MITE","feedback":"correct"},"page":0}"#
        );
    }
}
