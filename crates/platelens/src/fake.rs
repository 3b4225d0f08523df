//! Fake generation client for deterministic tests.
//!
//! Production code uses `OpenAiClient`; test code scripts this fake with
//! pre-configured completions so orchestration flows run without any
//! network calls.

use crate::client::GenerationClient;
use async_trait::async_trait;
use platelens_common::{ChatRequest, GenerationError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted reply: either completion text or a terminal failure.
#[derive(Debug, Clone)]
enum ScriptedReply {
    Text(String),
    Transport(String),
    Response { status: u16, body: String },
}

/// Scripted generation client. Replies are consumed in FIFO order, one per
/// `complete` call; every received request is recorded for assertions.
pub struct FakeGenerationClient {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeGenerationClient {
    pub fn builder() -> FakeGenerationClientBuilder {
        FakeGenerationClientBuilder::default()
    }

    /// Requests observed so far, in call order.
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl GenerationClient for FakeGenerationClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, GenerationError> {
        self.requests.lock().expect("requests lock").push(request);

        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| ScriptedReply::Text(String::new()));

        match reply {
            ScriptedReply::Text(text) => Ok(text),
            ScriptedReply::Transport(message) => Err(GenerationError::Transport(message)),
            ScriptedReply::Response { status, body } => {
                Err(GenerationError::Response { status, body })
            }
        }
    }
}

#[derive(Default)]
pub struct FakeGenerationClientBuilder {
    replies: VecDeque<ScriptedReply>,
}

impl FakeGenerationClientBuilder {
    /// Queue one completion text.
    pub fn reply(mut self, text: impl Into<String>) -> Self {
        self.replies.push_back(ScriptedReply::Text(text.into()));
        self
    }

    /// Queue a transport failure.
    pub fn transport_error(mut self, message: impl Into<String>) -> Self {
        self.replies
            .push_back(ScriptedReply::Transport(message.into()));
        self
    }

    /// Queue a non-success service response.
    pub fn response_error(mut self, status: u16, body: impl Into<String>) -> Self {
        self.replies.push_back(ScriptedReply::Response {
            status,
            body: body.into(),
        });
        self
    }

    pub fn build(self) -> FakeGenerationClient {
        FakeGenerationClient {
            replies: Mutex::new(self.replies),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platelens_common::ChatMessage;

    fn request() -> ChatRequest {
        ChatRequest {
            model: "test-model".to_string(),
            messages: vec![ChatMessage::user("hello")],
            max_tokens: 100,
            temperature: 0.1,
        }
    }

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        let fake = FakeGenerationClient::builder()
            .reply("first")
            .reply("second")
            .build();

        assert_eq!(fake.complete(request()).await.unwrap(), "first");
        assert_eq!(fake.complete(request()).await.unwrap(), "second");
        assert_eq!(fake.recorded_requests().len(), 2);
    }

    #[tokio::test]
    async fn scripted_errors_surface_as_generation_errors() {
        let fake = FakeGenerationClient::builder()
            .response_error(500, "overloaded")
            .build();

        match fake.complete(request()).await {
            Err(GenerationError::Response { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected response error, got {:?}", other.map(|_| ())),
        }
    }
}
