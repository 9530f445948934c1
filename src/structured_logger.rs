//! JSONL audit trail of submissions.
//!
//! Each line carries a per-process sequence number, a microsecond UTC
//! timestamp, the session id, the emitting component and the event itself.
//! Form values never reach the log; only field names do.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::domain::types::{ActorUid, LpaId};
use crate::navigation::{Section, Target};

const LOG_FILE_NAME: &str = "events.jsonl";

/// One line of the log.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u64,
    pub ts: String,
    pub session_id: String,
    pub component: String,
    pub event: Value,
}

/// What the engine records.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum JourneyEvent<'a> {
    DocumentCreated {
        lpa_id: &'a LpaId,
    },
    Submission {
        lpa_id: &'a LpaId,
        section: Section,
        actor: Option<ActorUid>,
        fields: &'a [&'a str],
    },
    Redirect {
        lpa_id: &'a LpaId,
        section: Section,
        target: &'a Target,
    },
    /// Sent back to the donor with errors or warnings.
    Rejected {
        lpa_id: &'a LpaId,
        section: Section,
        error_fields: &'a [String],
        warnings: &'a [&'a str],
    },
    Failure {
        lpa_id: &'a LpaId,
        section: Section,
        error: &'a str,
    },
}

impl JourneyEvent<'_> {
    fn component(&self) -> &'static str {
        match self {
            Self::DocumentCreated { .. } => "Store",
            _ => "Journey",
        }
    }
}

pub struct StructuredLogger {
    session_id: String,
    seq: AtomicU64,
    file: Mutex<File>,
    path: PathBuf,
}

impl StructuredLogger {
    /// Opens (appending) `<logs_dir>/events.jsonl`, creating the directory if needed.
    pub fn new(session_id: &str, logs_dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(logs_dir)?;
        let path = logs_dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            session_id: session_id.to_string(),
            seq: AtomicU64::new(0),
            file: Mutex::new(file),
            path,
        })
    }

    /// Appends one entry. Write failures are dropped; the log never fails a submission.
    pub fn log(&self, component: &str, event: impl Serialize) {
        let entry = LogEntry {
            seq: self.seq.fetch_add(1, Ordering::SeqCst) + 1,
            ts: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            session_id: self.session_id.clone(),
            component: component.to_string(),
            event: serde_json::to_value(event).unwrap_or(Value::Null),
        };
        let Ok(line) = serde_json::to_string(&entry) else {
            return;
        };
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
            let _ = file.flush();
        }
    }

    pub fn record(&self, event: JourneyEvent<'_>) {
        self.log(event.component(), &event);
    }

    pub fn log_document_created(&self, lpa_id: &LpaId) {
        self.record(JourneyEvent::DocumentCreated { lpa_id });
    }

    pub fn log_submission(
        &self,
        lpa_id: &LpaId,
        section: Section,
        actor: Option<ActorUid>,
        fields: &[&str],
    ) {
        self.record(JourneyEvent::Submission {
            lpa_id,
            section,
            actor,
            fields,
        });
    }

    pub fn log_redirect(&self, lpa_id: &LpaId, section: Section, target: &Target) {
        self.record(JourneyEvent::Redirect {
            lpa_id,
            section,
            target,
        });
    }

    pub fn log_rejected(&self, lpa_id: &LpaId, section: Section, fields: &[String], warnings: &[&str]) {
        self.record(JourneyEvent::Rejected {
            lpa_id,
            section,
            error_fields: fields,
            warnings,
        });
    }

    pub fn log_failure(&self, lpa_id: &LpaId, section: Section, error: &str) {
        self.record(JourneyEvent::Failure {
            lpa_id,
            section,
            error,
        });
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
#[path = "tests/structured_logger_tests.rs"]
mod tests;
