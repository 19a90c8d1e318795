//! Recipe analysis and generation round trips.
//!
//! Both operations share one pipeline: validate input and configuration, build
//! the prompt, call the provider, extract the JSON object from the reply,
//! check its top-level shape and normalize. Failures are returned as distinct
//! [`VitwiError`] kinds and never retried here.

use serde_json::Value;
use tracing::{info, warn};

use crate::config::{ApiSettings, RequestProfile};
use crate::error::{Result, VitwiError};
use crate::extract::parse_json_object;
use crate::llm::{CompletionRequest, LlmProvider};
use crate::models::{RawRecipe, RecipeAnalysis};
use crate::normalize::normalize;
use crate::prompt;

/// Issues analysis and generation requests through a provider.
pub struct RecipeRequester<'a> {
    provider: &'a dyn LlmProvider,
    settings: &'a ApiSettings,
}

impl<'a> RecipeRequester<'a> {
    pub fn new(provider: &'a dyn LlmProvider, settings: &'a ApiSettings) -> Self {
        Self { provider, settings }
    }

    /// Analyze free-form recipe text.
    ///
    /// Fails with `EmptyInput` for blank text, `ConfigMissing` before any
    /// request is sent when the API key is not configured, and with the
    /// reply-handling kinds (`ApiError`, `MalformedResponse`, `NoJsonFound`,
    /// `JsonParseError`, `IncompleteData`) afterwards.
    pub fn analyze(&self, recipe_text: &str) -> Result<RecipeAnalysis> {
        if recipe_text.trim().is_empty() {
            return Err(VitwiError::EmptyInput("Текст рецепта"));
        }
        self.settings.validate()?;

        let object = self.request_object(
            &prompt::analysis_prompt(recipe_text),
            RequestProfile::ANALYSIS,
        )?;
        let raw = RawRecipe::from_value(&object);
        let recipe = RecipeAnalysis::from_raw(normalize(raw)).inspect_err(|e| {
            warn!(error = %e, "analysis reply is incomplete");
        })?;

        info!(dish = %recipe.dish_name, steps = recipe.instructions.len(), "recipe analyzed");
        Ok(recipe)
    }

    /// Generate two or three recipes matching a preference query.
    ///
    /// The reply must be an object with a `recipes` array; otherwise the
    /// whole batch fails with `MalformedResponse`. Each element is normalized
    /// on its own and never fails: a missing name becomes a placeholder.
    pub fn generate(&self, query: &str) -> Result<Vec<RecipeAnalysis>> {
        if query.trim().is_empty() {
            return Err(VitwiError::EmptyInput("Запрос"));
        }
        self.settings.validate()?;

        let object = self.request_object(
            &prompt::generation_prompt(query),
            RequestProfile::GENERATION,
        )?;
        let Some(Value::Array(items)) = object.get("recipes") else {
            warn!("generation reply has no recipes array");
            return Err(VitwiError::MalformedResponse(
                "reply has no recipes array".to_string(),
            ));
        };

        let recipes: Vec<RecipeAnalysis> = items
            .iter()
            .map(|item| RecipeAnalysis::from_raw_lenient(normalize(RawRecipe::from_value(item))))
            .collect();

        info!(count = recipes.len(), "recipes generated");
        Ok(recipes)
    }

    fn request_object(&self, prompt: &str, profile: RequestProfile) -> Result<Value> {
        let reply = self.provider.complete(&CompletionRequest { prompt, profile })?;
        parse_json_object(&reply).inspect_err(|e| {
            warn!(model = self.provider.model_name(), error = %e, "could not read JSON from reply");
        })
    }
}
