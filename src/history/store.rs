use crate::error::Result;
use crate::models::{Message, SessionRecord};
use std::path::Path;

/// Trait for conversation archive backends
pub trait HistoryStore: Send + Sync {
    /// Load every archived session record, oldest first. An unreadable or
    /// malformed archive yields an empty list rather than an error.
    fn load(&self) -> Vec<SessionRecord>;

    /// Append one finished session to the archive and rewrite it.
    fn append(&self, session: &[Message]) -> Result<()>;

    /// Delete the archive entirely.
    fn clear(&self) -> Result<()>;

    /// Where the archive lives.
    fn path(&self) -> &Path;

    /// The messages of the most recently archived session, if any.
    fn last_session(&self) -> Vec<Message> {
        self.load()
            .pop()
            .map(|record| record.session)
            .unwrap_or_default()
    }
}
