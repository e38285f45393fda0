use async_trait::async_trait;
use newsdesk::api::CompletionClient;
use newsdesk::error::{NewsdeskError, Result};
use newsdesk::models::Message;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Inner {
    responses: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<Vec<Message>>>,
}

/// Completion double that replays queued responses in order and records every
/// prompt it receives. Clones share state, so a test can hand one clone to an
/// assistant and inspect the calls through another.
#[derive(Clone)]
pub struct ScriptedClient {
    inner: Arc<Inner>,
}

impl ScriptedClient {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            inner: Arc::new(Inner {
                responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, messages: &[Message], _model: &str) -> Result<String> {
        self.inner.calls.lock().unwrap().push(messages.to_vec());
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| {
                NewsdeskError::Other("ScriptedClient ran out of responses".to_string())
            })
    }
}

/// Completion double that fails every call.
pub struct FailingClient;

#[async_trait]
impl CompletionClient for FailingClient {
    async fn complete(&self, _messages: &[Message], _model: &str) -> Result<String> {
        Err(NewsdeskError::ApiError {
            status: 500,
            message: "scripted failure".to_string(),
        })
    }
}

/// Alternating user/assistant history of `n` messages.
pub fn history_of(n: usize) -> Vec<Message> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Message::user(format!("question {}", i))
            } else {
                Message::assistant(format!("answer {}", i))
            }
        })
        .collect()
}
