//! Saved recipes, persisted under the `savedRecipes` key.
//!
//! The collection is kept newest-first: saving prepends. Every mutation loads
//! the whole collection, changes it in memory and writes it back.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config;
use crate::error::Result;
use crate::models::{RecipeAnalysis, SavedRecipe};
use crate::storage::LocalStorage;

/// Result of [`RecipeStore::save`].
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(SavedRecipe),
    /// An entry with the same dish name and ingredients already exists;
    /// nothing was written.
    AlreadySaved,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

// ---------------------------------------------------------------------------
// RecipeStore
// ---------------------------------------------------------------------------

/// Query and mutation interface for saved recipes.
pub struct RecipeStore<'a> {
    storage: &'a LocalStorage,
}

impl<'a> RecipeStore<'a> {
    pub fn new(storage: &'a LocalStorage) -> Self {
        Self { storage }
    }

    fn load(&self) -> Vec<SavedRecipe> {
        self.storage.load_collection(config::SAVED_RECIPES_KEY)
    }

    fn store(&self, recipes: &[SavedRecipe]) -> Result<()> {
        self.storage.save_collection(config::SAVED_RECIPES_KEY, recipes)
    }

    /// All saved recipes, newest first.
    pub fn list(&self) -> Vec<SavedRecipe> {
        self.load()
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    pub fn get(&self, id: &str) -> Option<SavedRecipe> {
        self.load().into_iter().find(|r| r.id == id)
    }

    /// Whether a recipe with the same dish name and ingredients is saved.
    pub fn contains(&self, recipe: &RecipeAnalysis) -> bool {
        self.load().iter().any(|saved| saved.recipe.same_recipe(recipe))
    }

    /// Save a copy of `recipe` with a fresh id and timestamp at the front of
    /// the collection, unless it is already saved.
    pub fn save(&self, recipe: &RecipeAnalysis) -> Result<SaveOutcome> {
        let mut recipes = self.load();
        if recipes.iter().any(|saved| saved.recipe.same_recipe(recipe)) {
            debug!(dish = %recipe.dish_name, "recipe already saved");
            return Ok(SaveOutcome::AlreadySaved);
        }

        let saved = SavedRecipe {
            recipe: recipe.clone(),
            saved_at: jiff::Timestamp::now(),
            id: crate::models::new_id(),
        };
        recipes.insert(0, saved.clone());
        self.store(&recipes)?;

        info!(id = %saved.id, dish = %saved.dish_name, "recipe saved");
        Ok(SaveOutcome::Saved(saved))
    }

    /// Remove the recipe with `id`. Unknown ids are ignored.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut recipes = self.load();
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        self.store(&recipes)?;
        debug!(id, removed = before - recipes.len(), "recipe delete");
        Ok(())
    }

    /// Recipes whose dish name or any tag contains `query`, case-insensitively.
    ///
    /// A leading `#` is ignored so `"#десерт"` finds recipes tagged `"десерт"`.
    /// An empty query returns every recipe. Order is preserved.
    pub fn search(&self, query: &str) -> Vec<SavedRecipe> {
        let recipes = self.load();
        let query = query.trim().to_lowercase();
        let needle = query.strip_prefix('#').unwrap_or(query.as_str()).trim();
        if needle.is_empty() {
            return recipes;
        }

        recipes
            .into_iter()
            .filter(|r| {
                r.dish_name.to_lowercase().contains(needle) || r.has_tag_containing(needle)
            })
            .collect()
    }

    /// The most used tags, most frequent first. Ties keep the order in which
    /// the tags were first seen.
    ///
    /// `limit` defaults to [`config::DEFAULT_POPULAR_TAGS`].
    pub fn popular_tags(&self, limit: Option<usize>) -> Vec<String> {
        let limit = limit.unwrap_or(config::DEFAULT_POPULAR_TAGS);
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for recipe in self.load() {
            for tag in recipe.recipe.tags {
                match index.get(&tag) {
                    Some(&i) => counts[i].1 += 1,
                    None => {
                        index.insert(tag.clone(), counts.len());
                        counts.push((tag, 1));
                    }
                }
            }
        }

        // sort_by is stable
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().take(limit).map(|(tag, _)| tag).collect()
    }
}
