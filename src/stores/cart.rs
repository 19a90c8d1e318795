//! Shopping cart, persisted under the `shoppingCart` key.
//!
//! Item names are unique ignoring case and surrounding whitespace. The rule is
//! checked when items are added; the stored collection itself is a plain list.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config;
use crate::error::Result;
use crate::models::{CartItem, CartView};
use crate::storage::LocalStorage;

/// Result of [`CartStore::add`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(CartItem),
    /// An item with the same name is already in the cart; nothing was written.
    AlreadyInCart,
    /// The text was blank; nothing was written.
    Empty,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

// ---------------------------------------------------------------------------
// CartStore
// ---------------------------------------------------------------------------

/// Query and mutation interface for the shopping cart.
pub struct CartStore<'a> {
    storage: &'a LocalStorage,
}

impl<'a> CartStore<'a> {
    pub fn new(storage: &'a LocalStorage) -> Self {
        Self { storage }
    }

    fn load(&self) -> Vec<CartItem> {
        self.storage.load_collection(config::SHOPPING_CART_KEY)
    }

    fn store(&self, items: &[CartItem]) -> Result<()> {
        self.storage.save_collection(config::SHOPPING_CART_KEY, items)
    }

    /// The cart split into unpurchased and purchased items, each in the
    /// order they were added.
    pub fn list(&self) -> CartView {
        CartView::from(self.load())
    }

    /// All items in stored order.
    pub fn items(&self) -> Vec<CartItem> {
        self.load()
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// Append an ingredient unless it is blank or already in the cart.
    pub fn add(&self, ingredient: &str) -> Result<AddOutcome> {
        let name = ingredient.trim();
        if name.is_empty() {
            return Ok(AddOutcome::Empty);
        }

        let mut items = self.load();
        let key = CartItem::dedup_key(name);
        if items.iter().any(|item| CartItem::dedup_key(&item.name) == key) {
            debug!(name, "ingredient already in cart");
            return Ok(AddOutcome::AlreadyInCart);
        }

        let item = CartItem::new(name);
        items.push(item.clone());
        self.store(&items)?;
        info!(id = %item.id, name = %item.name, "ingredient added to cart");
        Ok(AddOutcome::Added(item))
    }

    /// Append every ingredient that is not blank and not already present,
    /// including earlier entries of the same batch. Writes once and returns
    /// how many items were added.
    pub fn add_all<I, S>(&self, ingredients: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = self.load();
        let mut seen: HashSet<String> = items
            .iter()
            .map(|item| CartItem::dedup_key(&item.name))
            .collect();

        let mut added = 0;
        for ingredient in ingredients {
            let name = ingredient.as_ref().trim();
            if name.is_empty() || !seen.insert(CartItem::dedup_key(name)) {
                continue;
            }
            items.push(CartItem::new(name));
            added += 1;
        }

        if added > 0 {
            self.store(&items)?;
        }
        info!(added, total = items.len(), "ingredients added to cart");
        Ok(added)
    }

    /// Flip the purchased flag of the item with `id`.
    ///
    /// Returns the new flag, or `None` if there is no such item.
    pub fn toggle(&self, id: &str) -> Result<Option<bool>> {
        let mut items = self.load();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.purchased = !item.purchased;
        let purchased = item.purchased;
        self.store(&items)?;
        Ok(Some(purchased))
    }

    /// Remove the item with `id`. Returns `false` for an unknown id.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut items = self.load();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.store(&items)?;
        Ok(true)
    }

    /// Empty the cart. Callers confirm with the user first.
    pub fn clear(&self) -> Result<()> {
        self.store(&[])?;
        info!("cart cleared");
        Ok(())
    }
}
