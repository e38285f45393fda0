pub mod classifier;
pub mod orchestrator;
pub mod summarizer;

pub use classifier::Label;
pub use orchestrator::{Assistant, SessionState, GREETING};

use crate::models::Message;

/// Last `n` messages of a history, or all of them when it is shorter.
pub(crate) fn tail(messages: &[Message], n: usize) -> &[Message] {
    &messages[messages.len().saturating_sub(n)..]
}
