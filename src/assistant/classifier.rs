use crate::api::CompletionClient;
use crate::assistant::summarizer::{summarize_history, HISTORY_SUMMARY_THRESHOLD};
use crate::assistant::tail;
use crate::error::Result;
use crate::models::Message;
use crate::news::NewsCategory;
use colored::*;

/// How many trailing history messages the classifier sees alongside the
/// current message.
const CLASSIFY_HISTORY_TAIL: usize = 5;

const CLASSIFIER_PROMPT: &str = "Classify the user's message based on the conversation history and current input:
- If the user wants the **latest news**, classify it as one of: 'news-tech', 'news-health', 'news-business', 'news-crypto'.
- If the user is asking a **general question** (e.g., definition, explanation, or follow-up like 'What was my last search?'), return 'general'.
Consider the conversation history to identify follow-up questions or context (e.g., user’s name or previous searches).
Examples:
- 'What is an ulcer?' → general
- 'Tell me the latest about crypto' → news-crypto
- 'Explain AI' → general
- 'Any business updates?' → news-business
- 'What was my last news search?' → general";

/// The classifier's routing decision for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NewsTech,
    NewsHealth,
    NewsBusiness,
    NewsCrypto,
    General,
}

impl Label {
    /// Parse raw model output: trimmed and lower-cased, exact match against
    /// the label vocabulary. Anything else is `General`.
    pub fn parse(raw: &str) -> Label {
        match raw.trim().to_lowercase().as_str() {
            "news-tech" => Label::NewsTech,
            "news-health" => Label::NewsHealth,
            "news-business" => Label::NewsBusiness,
            "news-crypto" => Label::NewsCrypto,
            _ => Label::General,
        }
    }

    /// The fixed label-to-provider-category mapping. `General` has none.
    pub fn news_category(&self) -> Option<NewsCategory> {
        match self {
            Label::NewsTech => Some(NewsCategory::Technology),
            Label::NewsHealth => Some(NewsCategory::Health),
            Label::NewsBusiness => Some(NewsCategory::Business),
            Label::NewsCrypto => Some(NewsCategory::Cryptocurrency),
            Label::General => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::NewsTech => "news-tech",
            Label::NewsHealth => "news-health",
            Label::NewsBusiness => "news-business",
            Label::NewsCrypto => "news-crypto",
            Label::General => "general",
        }
    }
}

/// Classify the current message given the session history. Histories past the
/// summary threshold are condensed first and the summary is folded into the
/// system prompt. The current message is passed both inside the history tail
/// and as the final prompt message.
pub async fn classify(
    client: &dyn CompletionClient,
    model: &str,
    history: &[Message],
    message: &str,
    verbose: bool,
) -> Result<Label> {
    let history_summary = if history.len() > HISTORY_SUMMARY_THRESHOLD {
        summarize_history(client, model, history).await?
    } else {
        String::new()
    };

    let mut system = CLASSIFIER_PROMPT.to_string();
    if !history_summary.is_empty() {
        system.push_str(&format!("\nConversation history summary: {}", history_summary));
    }

    let mut prompt = vec![Message::system(system)];
    prompt.extend(tail(history, CLASSIFY_HISTORY_TAIL).iter().cloned());
    prompt.push(Message::user(message));

    let raw = client.complete(&prompt, model).await?;
    let label = Label::parse(&raw);

    if verbose && label == Label::General && raw.trim().to_lowercase() != "general" {
        eprintln!(
            "{}",
            format!(
                "[newsdesk] Unrecognized classifier label {:?}, treating as general",
                raw.trim()
            )
            .dimmed()
        );
    }

    Ok(label)
}
