use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{CompletionRequest, LlmProvider};
use crate::config::ApiSettings;
use crate::error::{Result, VitwiError};

/// OpenRouter chat-completion request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Provider backed by an OpenRouter-compatible HTTP endpoint.
#[derive(Debug)]
pub struct OpenRouterProvider {
    settings: ApiSettings,
    client: Client,
}

impl OpenRouterProvider {
    /// Create a provider for `settings` with the given request timeout.
    ///
    /// The settings are not validated here; the requesters check them before
    /// every call.
    pub fn new(settings: ApiSettings, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }
}

impl LlmProvider for OpenRouterProvider {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        let body = ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: request.prompt,
            }],
            temperature: request.profile.temperature,
            max_tokens: request.profile.max_tokens,
        };

        info!(
            model = %self.settings.model,
            title = request.profile.title,
            prompt_len = request.prompt.len(),
            "sending completion request"
        );

        let resp = self
            .client
            .post(&self.settings.url)
            .bearer_auth(&self.settings.api_key)
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.settings.referer)
            .header("X-Title", request.profile.title)
            .json(&body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        debug!(status = status.as_u16(), body_len = text.len(), "completion response received");

        decode_completion(status, &text)
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}

/// Turn an HTTP status and response body into the assistant's reply text.
///
/// A non-success status becomes [`VitwiError::Api`] carrying `error.message`
/// from the body when the body has one, otherwise the status reason. A
/// success body without `choices[0].message.content` is
/// [`VitwiError::MalformedResponse`].
pub fn decode_completion(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        let error_body: serde_json::Value =
            serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({}));
        let message = error_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        warn!(status = status.as_u16(), %message, "completion API returned an error");
        return Err(VitwiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| VitwiError::MalformedResponse(format!("response is not JSON: {e}")))?;

    response
        .choices
        .and_then(|choices| choices.into_iter().next())
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| {
            VitwiError::MalformedResponse("no choices[0].message.content in response".to_string())
        })
}
