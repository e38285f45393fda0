use crate::news::NewsCategory;
use serde_json::Value;

pub const MAX_HEADLINES: usize = 10;

/// Fetches headlines from a NewsAPI-style provider. Every failure mode is
/// folded into the returned string; callers never see an error. The failure
/// text flows into summarization downstream exactly like real news content.
pub struct NewsFetcher {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl NewsFetcher {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, category: NewsCategory) -> String {
        if category.uses_keyword_search() {
            format!(
                "{}/everything?q={}&apiKey={}&language=en&sortBy=publishedAt",
                self.base_url, category, self.api_key
            )
        } else {
            format!(
                "{}/top-headlines?category={}&apiKey={}&language=en",
                self.base_url, category, self.api_key
            )
        }
    }

    pub async fn fetch(&self, category: NewsCategory) -> String {
        let url = self.build_url(category);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return format!("Failed to fetch news: {}", e),
        };

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(|m| m.to_string())
                })
                .unwrap_or_else(|| "Unknown error".to_string());
            return format!("Failed to fetch news: HTTP {} - {}", status.as_u16(), message);
        }

        match response.json::<Value>().await {
            Ok(body) => format_headlines(&body),
            Err(e) => format!("Failed to fetch news: {}", e),
        }
    }
}

/// Render the first `MAX_HEADLINES` articles as a `- title` bullet list.
/// Articles without a title are skipped silently.
pub fn format_headlines(body: &Value) -> String {
    let articles = match body.get("articles").and_then(|a| a.as_array()) {
        Some(articles) => articles,
        None => return String::new(),
    };

    articles
        .iter()
        .take(MAX_HEADLINES)
        .filter_map(|article| article.get("title").and_then(|t| t.as_str()))
        .map(|title| format!("- {}", title))
        .collect::<Vec<_>>()
        .join("\n")
}
