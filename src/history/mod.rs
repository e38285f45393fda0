mod archive;
mod store;

pub use archive::{JsonArchiveStore, ARCHIVE_TIMESTAMP_FORMAT, DEFAULT_MAX_SESSIONS};
pub use store::HistoryStore;
