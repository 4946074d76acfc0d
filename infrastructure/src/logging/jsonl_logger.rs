//! JSONL session transcript.
//!
//! Every [`SessionEvent`] becomes one line carrying `seq`, `type` and
//! `timestamp` alongside the event payload. Lines are buffered while a question
//! thread is in progress and written out when the thread or the session
//! closes, so a transcript read mid-interview only ever contains whole
//! threads.

use interview_application::ports::session_logger::{SessionEvent, SessionLogger};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Events after which the buffered lines are written to disk.
const CHECKPOINT_EVENTS: &[&str] = &[
    "gate_decision",
    "questions",
    "thread_complete",
    "thread_failed",
    "session_complete",
];

/// File name for a transcript started now, e.g. `session-20250101-093000.jsonl`.
pub fn transcript_file_name() -> String {
    format!("session-{}.jsonl", chrono::Local::now().format("%Y%m%d-%H%M%S"))
}

struct Transcript {
    writer: BufWriter<File>,
    next_seq: u64,
}

impl Transcript {
    fn record(&mut self, event: SessionEvent) -> Value {
        let mut record = Map::new();
        record.insert("seq".into(), self.next_seq.into());
        record.insert("type".into(), event.event_type.into());
        record.insert(
            "timestamp".into(),
            chrono::Utc::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
                .into(),
        );
        self.next_seq += 1;

        match event.payload {
            Value::Object(fields) => {
                for (key, value) in fields {
                    record.entry(key).or_insert(value);
                }
            }
            Value::Null => {}
            other => {
                record.insert("data".into(), other);
            }
        }
        Value::Object(record)
    }
}

/// Writes the interview transcript as JSON lines.
pub struct JsonlSessionLogger {
    transcript: Mutex<Transcript>,
    path: PathBuf,
}

impl JsonlSessionLogger {
    /// Open a transcript at `path`, creating parent directories.
    ///
    /// Returns `None` (after a warning) when the file cannot be created; the
    /// interview then runs without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(dir = %parent.display(), error = %e, "Transcript directory unavailable");
            return None;
        }

        let file = File::create(path)
            .map_err(|e| warn!(path = %path.display(), error = %e, "Transcript not created"))
            .ok()?;

        Some(Self {
            transcript: Mutex::new(Transcript {
                writer: BufWriter::new(file),
                next_seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    /// Open a transcript for a new session inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Option<Self> {
        Self::new(dir.as_ref().join(transcript_file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionLogger for JsonlSessionLogger {
    fn log(&self, event: SessionEvent) {
        let checkpoint = CHECKPOINT_EVENTS.contains(&event.event_type);
        let Ok(mut transcript) = self.transcript.lock() else {
            return;
        };

        let record = transcript.record(event);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };
        if writeln!(transcript.writer, "{}", line).is_err() {
            return;
        }
        if checkpoint && let Err(e) = transcript.writer.flush() {
            warn!(path = %self.path.display(), error = %e, "Transcript flush failed");
        }
    }
}

impl Drop for JsonlSessionLogger {
    fn drop(&mut self) {
        if let Ok(mut transcript) = self.transcript.lock() {
            let _ = transcript.writer.flush();
        }
    }
}
