use crate::api::CompletionClient;
use crate::assistant::classifier::classify;
use crate::assistant::summarizer::{summarize_history, summarize_news, HISTORY_SUMMARY_THRESHOLD};
use crate::assistant::tail;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::models::Message;
use crate::news::NewsFetcher;
use colored::*;
use std::path::PathBuf;

pub const GREETING: &str =
    "👋 Hi! Ask me about tech, health, business, or crypto news, or tell me something about yourself!";

const GENERAL_PROMPT: &str = "You are a helpful assistant. Answer the user's question based on the conversation history provided below. If the user asks about information from previous messages (e.g., their name or past searches), use the history to respond accurately.";

/// How many trailing history messages the general-QA prompt carries.
const GENERAL_CONTEXT_TAIL: usize = 10;

/// In-memory state of one conversation session. Owned by the caller and
/// passed into every turn; nothing here is shared or global.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub messages: Vec<Message>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The dialogue pipeline: classify each message, then either fetch-and-summarize
/// news or answer from history. Exposes the three session lifecycle hooks the
/// front end drives: `on_start`, `on_message`, `on_end`.
pub struct Assistant {
    pub completions: Box<dyn CompletionClient>,
    pub news: NewsFetcher,
    pub store: Box<dyn HistoryStore>,
    pub model: String,
    pub verbose: bool,
}

impl Assistant {
    /// Open a session. With `resume` set, the most recent archived session is
    /// loaded back into memory. Returns the fresh state and the greeting text.
    pub fn on_start(&self, resume: bool) -> (SessionState, &'static str) {
        let mut state = SessionState::new();
        if resume {
            state.messages = self.store.last_session();
            if self.verbose && !state.messages.is_empty() {
                eprintln!(
                    "{}",
                    format!(
                        "[newsdesk] Resumed {} messages from {}",
                        state.messages.len(),
                        self.store.path().display()
                    )
                    .dimmed()
                );
            }
        }
        (state, GREETING)
    }

    /// Process one user turn: append the message, classify it, and run the
    /// news path or the general-QA path. The assistant reply is appended to
    /// the session before it is returned. A completion failure aborts the
    /// turn with the user message still recorded but no reply.
    pub async fn on_message(&self, state: &mut SessionState, text: &str) -> Result<String> {
        state.messages.push(Message::user(text));

        let label = classify(
            self.completions.as_ref(),
            &self.model,
            &state.messages,
            text,
            self.verbose,
        )
        .await?;
        if self.verbose {
            eprintln!(
                "{}",
                format!("[newsdesk] Classified as {}", label.as_str()).dimmed()
            );
        }

        let response = match label.news_category() {
            Some(category) => {
                if self.verbose {
                    eprintln!(
                        "{}",
                        format!("[newsdesk] Fetching {} headlines", category).dimmed()
                    );
                }
                let news_text = self.news.fetch(category).await;
                let summary = summarize_news(
                    self.completions.as_ref(),
                    &self.model,
                    &news_text,
                    category,
                    &state.messages,
                )
                .await?;
                format!("📰 Here is the latest **{}** news:\n\n{}", category, summary)
            }
            None => self.answer_general(&state.messages).await?,
        };

        state.messages.push(Message::assistant(response.clone()));
        Ok(response)
    }

    /// Answer a general question from conversation context. Long histories
    /// are summarized into the system prompt; the last few messages ride
    /// along verbatim, current question included.
    async fn answer_general(&self, history: &[Message]) -> Result<String> {
        let history_summary = if history.len() > HISTORY_SUMMARY_THRESHOLD {
            summarize_history(self.completions.as_ref(), &self.model, history).await?
        } else {
            String::new()
        };

        let mut system = GENERAL_PROMPT.to_string();
        if !history_summary.is_empty() {
            system.push_str(&format!("\nConversation history summary: {}", history_summary));
        }

        let mut prompt = vec![Message::system(system)];
        prompt.extend(tail(history, GENERAL_CONTEXT_TAIL).iter().cloned());

        self.completions.complete(&prompt, &self.model).await
    }

    /// Close a session: archive its messages and report where they went.
    /// Sessions with no messages are not archived.
    pub fn on_end(&self, state: &SessionState) -> Result<Option<PathBuf>> {
        if state.is_empty() {
            return Ok(None);
        }
        self.store.append(&state.messages)?;
        Ok(Some(self.store.path().to_path_buf()))
    }
}
