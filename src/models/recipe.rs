use serde::{Deserialize, Serialize};

use super::nutrition::{NutritionValues, DEFAULT_TOTAL_WEIGHT};
use super::raw::RawRecipe;
use crate::error::{Result, VitwiError};

/// Name shown for a generated recipe the model left unnamed.
pub const UNKNOWN_DISH_NAME: &str = "Неизвестное блюдо";

fn default_servings() -> u32 {
    1
}

fn default_total_weight() -> f64 {
    DEFAULT_TOTAL_WEIGHT
}

// ---------------------------------------------------------------------------
// Instruction: One cooking step
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub step: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

// ---------------------------------------------------------------------------
// DifficultyLevel: Coarse classification of the free-text difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl DifficultyLevel {
    /// Classify a difficulty string such as `"Легко"` or `"средней сложности"`.
    pub fn classify(difficulty: &str) -> Self {
        let d = difficulty.to_lowercase();
        if d.contains("легк") || d.contains("прост") {
            DifficultyLevel::Easy
        } else if d.contains("средн") || d.contains("умерен") {
            DifficultyLevel::Medium
        } else if d.contains("сложн") || d.contains("трудн") {
            DifficultyLevel::Hard
        } else {
            DifficultyLevel::Unknown
        }
    }
}

// ---------------------------------------------------------------------------
// RecipeAnalysis: Normalized result of an analysis or generation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAnalysis {
    pub dish_name: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default = "default_total_weight")]
    pub total_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutrition_per_100g: NutritionValues,
    #[serde(default)]
    pub nutrition_per_serving: NutritionValues,
    #[serde(default)]
    pub nutrition: NutritionValues,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeAnalysis {
    /// Promote a normalized raw recipe, requiring a dish name and instructions.
    pub fn from_raw(raw: RawRecipe) -> Result<Self> {
        if raw.dish_name.is_none() {
            return Err(VitwiError::IncompleteData("dishName is missing".to_string()));
        }
        if raw.instructions.is_none() {
            return Err(VitwiError::IncompleteData(
                "instructions are missing".to_string(),
            ));
        }
        Ok(Self::from_raw_lenient(raw))
    }

    /// Promote a normalized raw recipe, substituting a placeholder name and an
    /// empty step list when they are missing.
    pub fn from_raw_lenient(raw: RawRecipe) -> Self {
        Self {
            dish_name: raw
                .dish_name
                .unwrap_or_else(|| UNKNOWN_DISH_NAME.to_string()),
            servings: raw.servings.unwrap_or_else(default_servings),
            total_weight: raw.total_weight.unwrap_or(DEFAULT_TOTAL_WEIGHT),
            difficulty: raw.difficulty,
            cooking_time: raw.cooking_time,
            ingredients: raw.ingredients.unwrap_or_default(),
            nutrition_per_100g: raw.nutrition_per_100g.unwrap_or_default().clamped(),
            nutrition_per_serving: raw.nutrition_per_serving.unwrap_or_default().clamped(),
            nutrition: raw.nutrition.unwrap_or_default().clamped(),
            instructions: raw.instructions.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
        }
    }

    /// Whether `other` is the same recipe for duplicate detection: equal dish
    /// name and the same ingredients in the same order.
    pub fn same_recipe(&self, other: &RecipeAnalysis) -> bool {
        self.dish_name == other.dish_name && self.ingredients == other.ingredients
    }

    pub fn difficulty_level(&self) -> DifficultyLevel {
        self.difficulty
            .as_deref()
            .map(DifficultyLevel::classify)
            .unwrap_or(DifficultyLevel::Unknown)
    }

    /// Whether any tag contains `needle` (already lowercased).
    pub(crate) fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

// ---------------------------------------------------------------------------
// SavedRecipe: A recipe persisted in the local recipe store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    #[serde(flatten)]
    pub recipe: RecipeAnalysis,
    pub saved_at: jiff::Timestamp,
    pub id: String,
}

impl std::ops::Deref for SavedRecipe {
    type Target = RecipeAnalysis;

    fn deref(&self) -> &RecipeAnalysis {
        &self.recipe
    }
}
