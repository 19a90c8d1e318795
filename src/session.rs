//! Per-user UI context and the app flows built on it.
//!
//! A [`Session`] remembers what the user is looking at: the last analyzed
//! recipe and the last batch of generated recipes. The `VitwiSdk` methods in
//! this module combine it with the stores and report the outcome to the user
//! through the [`HostBridge`].

use tracing::{debug, info};

use crate::error::{Result, VitwiError};
use crate::host::HostBridge;
use crate::models::RecipeAnalysis;
use crate::stores::{AddOutcome, Notice, SaveOutcome};
use crate::VitwiSdk;

#[derive(Debug, Clone, Default)]
pub struct Session {
    recipe_text: String,
    current: Option<RecipeAnalysis>,
    generated: Vec<RecipeAnalysis>,
    forwarded_consumed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the recipe most recently submitted for analysis.
    pub fn recipe_text(&self) -> &str {
        &self.recipe_text
    }

    /// The recipe currently on screen.
    pub fn current(&self) -> Option<&RecipeAnalysis> {
        self.current.as_ref()
    }

    /// The last batch of generated recipes.
    pub fn generated(&self) -> &[RecipeAnalysis] {
        &self.generated
    }

    pub fn set_analysis(&mut self, recipe_text: &str, recipe: RecipeAnalysis) {
        self.recipe_text = recipe_text.to_string();
        self.current = Some(recipe);
    }

    pub fn set_generated(&mut self, recipes: Vec<RecipeAnalysis>) {
        self.generated = recipes;
    }

    /// Forget the current recipe and its text. Generated recipes stay.
    pub fn reset(&mut self) {
        self.recipe_text.clear();
        self.current = None;
    }

    /// Text the user forwarded to the assistant.
    ///
    /// Returned only on the first call per session, and only if it is not
    /// blank.
    pub fn take_forwarded_text(&mut self, host: &dyn HostBridge) -> Option<String> {
        if self.forwarded_consumed {
            return None;
        }
        let text = host
            .forwarded_message_text()
            .filter(|text| !text.trim().is_empty())?;
        self.forwarded_consumed = true;
        Some(text)
    }

    fn generated_recipe(&self, index: usize) -> Result<&RecipeAnalysis> {
        self.generated
            .get(index)
            .ok_or_else(|| VitwiError::InvalidArgument(format!("No generated recipe at {index}")))
    }
}

// ---------------------------------------------------------------------------
// App flows
// ---------------------------------------------------------------------------

impl VitwiSdk {
    /// Analyze `recipe_text` and make the result the session's current recipe.
    ///
    /// On failure the session is left unchanged.
    pub fn analyze_into(&self, session: &mut Session, recipe_text: &str) -> Result<RecipeAnalysis> {
        self.host().vibrate();
        let recipe = self.analyze(recipe_text)?;
        session.set_analysis(recipe_text, recipe.clone());
        Ok(recipe)
    }

    /// Generate recipes for `query` and keep them in the session.
    ///
    /// On failure the previous batch is kept.
    pub fn generate_into(
        &self,
        session: &mut Session,
        query: &str,
    ) -> Result<Vec<RecipeAnalysis>> {
        self.host().vibrate();
        let recipes = self.generate(query)?;
        session.set_generated(recipes.clone());
        Ok(recipes)
    }

    /// Whether the session's current recipe is already saved.
    pub fn is_current_saved(&self, session: &Session) -> bool {
        session
            .current()
            .is_some_and(|recipe| self.recipes().contains(recipe))
    }

    /// Save the session's current recipe.
    pub fn save_current(&self, session: &Session) -> Result<SaveOutcome> {
        let recipe = session
            .current()
            .ok_or_else(|| VitwiError::InvalidArgument("No recipe to save".into()))?;
        self.save_and_notify(recipe)
    }

    /// Save the generated recipe at `index`.
    pub fn save_generated(&self, session: &Session, index: usize) -> Result<SaveOutcome> {
        let recipe = session.generated_recipe(index)?;
        self.save_and_notify(recipe)
    }

    /// Delete a saved recipe. Unknown ids are ignored.
    pub fn delete_saved(&self, id: &str) -> Result<()> {
        self.recipes().delete(id)?;
        self.notify(Notice::RecipeDeleted);
        Ok(())
    }

    /// Add one ingredient to the cart.
    pub fn add_to_cart(&self, ingredient: &str) -> Result<AddOutcome> {
        let outcome = self.cart().add(ingredient)?;
        match &outcome {
            AddOutcome::Added(_) => {
                self.notify(Notice::AddedToCart);
                self.host().vibrate();
            }
            AddOutcome::AlreadyInCart => self.notify(Notice::AlreadyInCart),
            AddOutcome::Empty => {}
        }
        Ok(outcome)
    }

    /// Add every ingredient of the session's current recipe to the cart.
    pub fn add_current_ingredients_to_cart(&self, session: &Session) -> Result<usize> {
        let recipe = session
            .current()
            .ok_or_else(|| VitwiError::InvalidArgument("No recipe on screen".into()))?;
        self.add_batch(&recipe.ingredients)
    }

    /// Add every ingredient of the generated recipe at `index` to the cart.
    pub fn add_generated_ingredients_to_cart(
        &self,
        session: &Session,
        index: usize,
    ) -> Result<usize> {
        let recipe = session.generated_recipe(index)?;
        self.add_batch(&recipe.ingredients)
    }

    /// Add the ingredient at `index` of a saved recipe to the cart.
    pub fn add_saved_ingredient_to_cart(&self, recipe_id: &str, index: usize) -> Result<AddOutcome> {
        let recipe = self.saved(recipe_id)?;
        let ingredient = recipe.ingredients.get(index).ok_or_else(|| {
            VitwiError::InvalidArgument(format!("Recipe {recipe_id} has no ingredient at {index}"))
        })?;
        self.add_to_cart(ingredient)
    }

    /// Add every ingredient of a saved recipe to the cart.
    pub fn add_saved_ingredients_to_cart(&self, recipe_id: &str) -> Result<usize> {
        let recipe = self.saved(recipe_id)?;
        self.add_batch(&recipe.ingredients)
    }

    /// Flip an item's purchased flag. Returns the new flag, or `None` for an
    /// unknown id.
    pub fn toggle_cart_item(&self, id: &str) -> Result<Option<bool>> {
        let purchased = self.cart().toggle(id)?;
        if purchased.is_some() {
            self.host().vibrate();
        }
        Ok(purchased)
    }

    /// Remove an item from the cart. Returns whether anything was removed.
    pub fn remove_from_cart(&self, id: &str) -> Result<bool> {
        let removed = self.cart().remove(id)?;
        if removed {
            self.notify(Notice::RemovedFromCart);
        }
        Ok(removed)
    }

    pub fn clear_cart(&self) -> Result<()> {
        self.cart().clear()?;
        self.notify(Notice::CartCleared);
        Ok(())
    }

    fn saved(&self, recipe_id: &str) -> Result<crate::models::SavedRecipe> {
        self.recipes()
            .get(recipe_id)
            .ok_or_else(|| VitwiError::InvalidArgument(format!("Saved recipe not found: {recipe_id}")))
    }

    fn save_and_notify(&self, recipe: &RecipeAnalysis) -> Result<SaveOutcome> {
        let outcome = self.recipes().save(recipe)?;
        if outcome.is_saved() {
            self.notify(Notice::RecipeSaved);
            self.host().vibrate();
        } else {
            self.notify(Notice::AlreadySaved);
        }
        Ok(outcome)
    }

    fn add_batch(&self, ingredients: &[String]) -> Result<usize> {
        let added = self.cart().add_all(ingredients)?;
        debug!(requested = ingredients.len(), added, "batch add to cart");
        self.notify(Notice::for_batch(added));
        if added > 0 {
            self.host().vibrate();
        }
        info!(added, "ingredients sent to cart");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NoopHost;

    struct Forwarding(&'static str);

    impl HostBridge for Forwarding {
        fn forwarded_message_text(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn forwarded_text_is_taken_once() {
        let mut session = Session::new();
        let host = Forwarding("Борщ: свекла, капуста");
        assert_eq!(
            session.take_forwarded_text(&host).as_deref(),
            Some("Борщ: свекла, капуста")
        );
        assert_eq!(session.take_forwarded_text(&host), None);
    }

    #[test]
    fn blank_forwarded_text_is_ignored() {
        let mut session = Session::new();
        assert_eq!(session.take_forwarded_text(&Forwarding("   ")), None);
        assert_eq!(session.take_forwarded_text(&NoopHost), None);
    }

    #[test]
    fn bad_generated_index() {
        let session = Session::new();
        assert!(matches!(
            session.generated_recipe(0),
            Err(VitwiError::InvalidArgument(_))
        ));
    }
}
