use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::{Mutex, PoisonError},
};

use crate::trace::trace::TraceEvent;

/// Append-only JSONL file of [`TraceEvent`]s, one line per submission.
pub struct TraceLogger {
    file: Mutex<File>,
}

impl TraceLogger {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one event. Failures are warnings; a trace never breaks a
    /// submission.
    pub fn log(&self, event: &TraceEvent) {
        if let Err(e) = self.append(event) {
            tracing::warn!(error = %e, form = %event.form_id, "failed to write trace event");
        }
    }

    fn append(&self, event: &TraceEvent) -> io::Result<()> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(&line)
    }
}
