use std::path::PathBuf;

use crate::error::{Result, VitwiError};

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "tngtech/tng-r1t-chimera:free";
pub const DEFAULT_REFERER: &str = "https://vitwi.app";

/// Value shipped in the example config; treated the same as no key at all.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_OPENROUTER_API_KEY";

// Persisted storage keys
pub const SAVED_RECIPES_KEY: &str = "savedRecipes";
pub const SHOPPING_CART_KEY: &str = "shoppingCart";
pub const THEME_KEY: &str = "vitwi-theme";
pub const DEFAULT_THEME: &str = "light";

pub const DEFAULT_POPULAR_TAGS: usize = 10;

/// Credentials and endpoint of the chat-completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub api_key: String,
    pub url: String,
    pub model: String,
    /// Sent as `HTTP-Referer`; identifies the calling origin to OpenRouter.
    pub referer: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            url: OPENROUTER_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

impl ApiSettings {
    /// Settings with the given key and every other field defaulted.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Read settings from `OPENROUTER_API_KEY`, `OPENROUTER_URL`,
    /// `OPENROUTER_MODEL` and `VITWI_REFERER`.
    ///
    /// Unset variables fall back to the defaults. A missing key is not an
    /// error here; [`validate()`](Self::validate) reports it when a request
    /// is attempted.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, fallback: String| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
        };
        Self {
            api_key: var("OPENROUTER_API_KEY", String::new()),
            url: var("OPENROUTER_URL", defaults.url),
            model: var("OPENROUTER_MODEL", defaults.model),
            referer: var("VITWI_REFERER", defaults.referer),
        }
    }

    /// Check that a request can be attempted with these settings.
    pub fn validate(&self) -> Result<()> {
        let key = self.api_key.trim();
        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            return Err(VitwiError::ConfigMissing(
                "OpenRouter API key is not set".to_string(),
            ));
        }
        if self.url.trim().is_empty() {
            return Err(VitwiError::ConfigMissing("endpoint URL is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(VitwiError::ConfigMissing("model identifier is empty".to_string()));
        }
        Ok(())
    }
}

/// Per-call request parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestProfile {
    /// Sent as `X-Title`.
    pub title: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl RequestProfile {
    pub const ANALYSIS: RequestProfile = RequestProfile {
        title: "Recipe Analyzer",
        temperature: 0.7,
        max_tokens: 3000,
    };

    pub const GENERATION: RequestProfile = RequestProfile {
        title: "Vita Recipe Generator",
        temperature: 0.8,
        max_tokens: 4000,
    };
}

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("vitwi-sdk")
    } else {
        PathBuf::from(".vitwi-sdk-data")
    }
}
