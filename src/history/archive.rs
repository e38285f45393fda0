use crate::error::Result;
use crate::history::HistoryStore;
use crate::models::{Message, SessionRecord};
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Oldest sessions are dropped past this count unless configured otherwise.
pub const DEFAULT_MAX_SESSIONS: usize = 100;

/// Archive of finished sessions in a single JSON file: an array of records,
/// each `{timestamp, session}`. The whole file is rewritten on every append;
/// concurrent writers are last-writer-wins.
pub struct JsonArchiveStore {
    path: PathBuf,
    max_sessions: usize,
}

impl JsonArchiveStore {
    /// `max_sessions` caps how many records the file retains; 0 disables
    /// the cap.
    pub fn new(path: impl Into<PathBuf>, max_sessions: usize) -> Self {
        Self {
            path: path.into(),
            max_sessions,
        }
    }

    /// Platform data directory, with a working-directory fallback when the
    /// platform offers none.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("newsdesk").join("chat_history.json"))
            .unwrap_or_else(|| PathBuf::from("chat_history.json"))
    }
}

impl HistoryStore for JsonArchiveStore {
    fn load(&self) -> Vec<SessionRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Vec::new(),
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    fn append(&self, session: &[Message]) -> Result<()> {
        let mut records = self.load();
        records.push(SessionRecord {
            timestamp: Local::now().format(ARCHIVE_TIMESTAMP_FORMAT).to_string(),
            session: session.to_vec(),
        });

        if self.max_sessions > 0 && records.len() > self.max_sessions {
            let excess = records.len() - self.max_sessions;
            records.drain(..excess);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
