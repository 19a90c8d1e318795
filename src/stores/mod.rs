//! Locally persisted collections.
//!
//! Each store borrows the SDK's [`LocalStorage`](crate::storage::LocalStorage)
//! and owns exactly one key in it.

pub mod cart;
pub mod recipes;

pub use cart::{AddOutcome, CartStore};
pub use recipes::{RecipeStore, SaveOutcome};

/// A soft, user-visible condition that is not an operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    RecipeSaved,
    AlreadySaved,
    RecipeDeleted,
    AddedToCart,
    AlreadyInCart,
    /// A batch add put this many new items in the cart.
    AddedManyToCart(usize),
    /// A batch add found every item already in the cart.
    AllAlreadyInCart,
    RemovedFromCart,
    CartCleared,
}

impl Notice {
    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Notice::RecipeSaved => "Рецепт сохранен!".to_string(),
            Notice::AlreadySaved => "Этот рецепт уже сохранен".to_string(),
            Notice::RecipeDeleted => "Рецепт удален".to_string(),
            Notice::AddedToCart => "Продукт добавлен в корзину!".to_string(),
            Notice::AlreadyInCart => "Этот продукт уже в корзине".to_string(),
            Notice::AddedManyToCart(n) => format!("Добавлено {n} продуктов в корзину!"),
            Notice::AllAlreadyInCart => "Все продукты уже в корзине".to_string(),
            Notice::RemovedFromCart => "Продукт удален из корзины".to_string(),
            Notice::CartCleared => "Корзина очищена".to_string(),
        }
    }

    /// Notice for a batch add that put `added` new items in the cart.
    pub fn for_batch(added: usize) -> Self {
        if added > 0 {
            Notice::AddedManyToCart(added)
        } else {
            Notice::AllAlreadyInCart
        }
    }
}
