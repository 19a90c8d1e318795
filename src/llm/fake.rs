//! Canned-reply provider for tests and offline demos.

use std::sync::Mutex;

use super::{CompletionRequest, LlmProvider};
use crate::error::{Result, VitwiError};

#[derive(Debug, Clone)]
enum FakeReply {
    Text(String),
    ApiError { status: u16, message: String },
}

/// A provider that answers from registered replies instead of the network.
///
/// Replies are matched by checking whether the prompt contains a registered
/// substring; the first match wins. Without a match the default reply is used,
/// or an [`VitwiError::Api`] 404 if there is none. Every prompt is recorded.
#[derive(Debug, Default)]
pub struct FakeProvider {
    replies: Vec<(String, FakeReply)>,
    default_reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that gives `reply` to every prompt.
    pub fn always(reply: &str) -> Self {
        Self::new().with_default_reply(reply)
    }

    /// Reply with `reply` to prompts containing `prompt_contains`.
    pub fn with_reply(mut self, prompt_contains: &str, reply: &str) -> Self {
        self.replies
            .push((prompt_contains.to_string(), FakeReply::Text(reply.to_string())));
        self
    }

    /// Fail with an API error for prompts containing `prompt_contains`.
    pub fn with_api_error(mut self, prompt_contains: &str, status: u16, message: &str) -> Self {
        self.replies.push((
            prompt_contains.to_string(),
            FakeReply::ApiError {
                status,
                message: message.to_string(),
            },
        ));
        self
    }

    pub fn with_default_reply(mut self, reply: &str) -> Self {
        self.default_reply = Some(reply.to_string());
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl LlmProvider for FakeProvider {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(request.prompt.to_string());
        }

        for (needle, reply) in &self.replies {
            if request.prompt.contains(needle.as_str()) {
                return match reply.clone() {
                    FakeReply::Text(text) => Ok(text),
                    FakeReply::ApiError { status, message } => {
                        Err(VitwiError::Api { status, message })
                    }
                };
            }
        }

        self.default_reply.clone().ok_or_else(|| VitwiError::Api {
            status: 404,
            message: "no fake reply registered".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}
