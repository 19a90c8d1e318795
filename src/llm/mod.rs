//! Chat-completion providers.
//!
//! [`LlmProvider`] is the seam between the recipe requesters and the network.
//! [`OpenRouterProvider`] talks to an OpenRouter-compatible endpoint;
//! [`FakeProvider`] answers from canned replies for tests and demos.

mod fake;
mod openrouter;

pub use fake::FakeProvider;
pub use openrouter::{decode_completion, OpenRouterProvider};

use std::fmt;

use crate::config::RequestProfile;
use crate::error::Result;

/// A single-turn completion request.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
    pub profile: RequestProfile,
}

/// Sends a prompt to a language model and returns the assistant's text.
pub trait LlmProvider: Send + Sync + fmt::Debug {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String>;

    /// Model identifier used for requests (for logging).
    fn model_name(&self) -> &str;
}
