use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CartItem: One shopping list line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub purchased: bool,
    pub added_at: jiff::Timestamp,
}

impl CartItem {
    /// Create an unpurchased item. `name` is trimmed.
    pub fn new(name: &str) -> Self {
        Self {
            id: super::new_id(),
            name: name.trim().to_string(),
            purchased: false,
            added_at: jiff::Timestamp::now(),
        }
    }

    /// Key used for duplicate detection: trimmed and lowercased name.
    pub fn dedup_key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// CartView: Cart split for display
// ---------------------------------------------------------------------------

/// The cart partitioned into items still to buy and items already bought,
/// each in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartView {
    pub unpurchased: Vec<CartItem>,
    pub purchased: Vec<CartItem>,
}

impl CartView {
    pub fn len(&self) -> usize {
        self.unpurchased.len() + self.purchased.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All items, unpurchased first.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.unpurchased.iter().chain(self.purchased.iter())
    }
}

impl From<Vec<CartItem>> for CartView {
    fn from(items: Vec<CartItem>) -> Self {
        let (purchased, unpurchased) = items.into_iter().partition(|item| item.purchased);
        Self {
            unpurchased,
            purchased,
        }
    }
}
