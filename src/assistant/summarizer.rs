use crate::api::CompletionClient;
use crate::assistant::tail;
use crate::error::Result;
use crate::models::Message;
use crate::news::NewsCategory;

/// Histories longer than this get condensed into a summary before they are
/// used as prompt context.
pub const HISTORY_SUMMARY_THRESHOLD: usize = 10;

/// How many trailing history messages ride along with a news summary request.
const NEWS_CONTEXT_TAIL: usize = 5;

pub const HISTORY_SUMMARY_PROMPT: &str = "Summarize the following conversation history concisely, focusing on key details like the user's name, preferences, or previous search topics.";

/// Condense a conversation history into one model-written summary. An empty
/// history returns an empty string without calling the provider. The model
/// output is returned verbatim.
pub async fn summarize_history(
    client: &dyn CompletionClient,
    model: &str,
    history: &[Message],
) -> Result<String> {
    if history.is_empty() {
        return Ok(String::new());
    }

    let flattened = history
        .iter()
        .map(|message| format!("{}: {}", message.role, message.content))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = vec![Message::system(HISTORY_SUMMARY_PROMPT), Message::user(flattened)];
    client.complete(&prompt, model).await
}

/// Summarize fetched news text for the user. Long histories are summarized
/// first and the summary is folded into the system message; the last few
/// history messages are appended as additional context. A fetch-failure
/// string arriving as `news_text` is summarized like any other content.
pub async fn summarize_news(
    client: &dyn CompletionClient,
    model: &str,
    news_text: &str,
    category: NewsCategory,
    history: &[Message],
) -> Result<String> {
    let history_summary = if history.len() > HISTORY_SUMMARY_THRESHOLD {
        summarize_history(client, model, history).await?
    } else {
        String::new()
    };

    let mut system = format!(
        "You are a smart news assistant. Summarize the following {} news for a user. Use the conversation history summary to tailor the response if relevant.",
        category
    );
    if !history_summary.is_empty() {
        system.push_str(&format!("\nConversation history summary: {}", history_summary));
    }

    let mut prompt = vec![Message::system(system), Message::user(news_text)];
    prompt.extend(tail(history, NEWS_CONTEXT_TAIL).iter().cloned());

    client.complete(&prompt, model).await
}
