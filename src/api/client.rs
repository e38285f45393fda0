use crate::api::response::extract_content;
use crate::api::RequestBody;
use crate::error::{NewsdeskError, Result};
use crate::models::Message;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// The completion capability: an ordered message list in, generated text out.
/// Provider choice is an injected dependency of everything that talks to the
/// model, so tests can substitute a scripted implementation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[Message], model: &str) -> Result<String>;
}

/// OpenAI-compatible `/chat/completions` client. Covers any provider speaking
/// that wire format; the default endpoint is Gemini's compatibility layer.
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ChatCompletionsClient {
    pub fn new(api_key: &str, endpoint: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                NewsdeskError::Other(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, messages: &[Message], model: &str) -> Result<String> {
        let request_body = RequestBody {
            model: model.to_string(),
            messages: messages.to_vec(),
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NewsdeskError::ApiError {
                status,
                message: error_text,
            });
        }

        let response_json: Value = response.json().await?;
        extract_content(&response_json)?.ok_or_else(|| {
            NewsdeskError::Other("Completion response contained no content".to_string())
        })
    }
}
