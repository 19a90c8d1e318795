//! Vitwi SDK for Rust.
//!
//! The core of the Vitwi recipe assistant: recipe text is sent to an
//! OpenRouter-compatible language model for a structured nutritional analysis,
//! a free-text preference query can be turned into two or three generated
//! recipes, and results can be saved locally, searched by name or tag, and
//! turned into a shopping list.
//!
//! # Quick start
//!
//! ```no_run
//! use vitwi_sdk::{ApiSettings, VitwiSdk};
//!
//! let sdk = VitwiSdk::builder()
//!     .settings(ApiSettings::from_env())
//!     .build()
//!     .unwrap();
//!
//! // Analyze a recipe and keep it
//! let recipe = sdk.analyze("Омлет из 3 яиц и 50 г молока").unwrap();
//! sdk.recipes().save(&recipe).unwrap();
//!
//! // Put its ingredients on the shopping list
//! sdk.cart().add_all(&recipe.ingredients).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod extract;
pub mod host;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod requester;
pub mod session;
pub mod storage;
pub mod stores;

#[cfg(feature = "async")]
pub use async_client::AsyncVitwiSdk;
pub use config::{ApiSettings, RequestProfile};
pub use error::{Result, VitwiError};
pub use host::{HostBridge, NoopHost, UserData};
pub use llm::{FakeProvider, LlmProvider, OpenRouterProvider};
pub use models::{
    CartItem, CartView, DifficultyLevel, Instruction, NutritionValues, RecipeAnalysis,
    SavedRecipe,
};
pub use requester::RecipeRequester;
pub use session::Session;
pub use storage::LocalStorage;
pub use stores::{AddOutcome, CartStore, Notice, RecipeStore, SaveOutcome};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// VitwiSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`VitwiSdk`] instance.
///
/// Use [`VitwiSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](VitwiSdkBuilder::build) to create the SDK.
pub struct VitwiSdkBuilder {
    storage_dir: Option<PathBuf>,
    settings: ApiSettings,
    timeout: Duration,
    provider: Option<Arc<dyn LlmProvider>>,
    host: Arc<dyn HostBridge>,
}

impl Default for VitwiSdkBuilder {
    fn default() -> Self {
        Self {
            storage_dir: None,
            settings: ApiSettings::default(),
            timeout: Duration::from_secs(120),
            provider: None,
            host: Arc::new(NoopHost),
        }
    }
}

impl VitwiSdkBuilder {
    /// Set a custom storage directory.
    ///
    /// If not set, the platform-appropriate data directory is used
    /// (e.g. `~/.local/share/vitwi-sdk` on Linux).
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the API credential, endpoint and model.
    ///
    /// Defaults to the OpenRouter endpoint with no key, which makes every
    /// analysis or generation fail with `ConfigMissing`.
    pub fn settings(mut self, settings: ApiSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the HTTP request timeout. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom completion provider instead of the OpenRouter client.
    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Attach the hosting platform's bridge.
    pub fn host(mut self, host: Arc<dyn HostBridge>) -> Self {
        self.host = host;
        self
    }

    /// Build the SDK, opening local storage and the HTTP client.
    ///
    /// Nothing is sent over the network until the first request.
    pub fn build(self) -> Result<VitwiSdk> {
        let storage = LocalStorage::new(self.storage_dir)?;
        let provider: Arc<dyn LlmProvider> = match self.provider {
            Some(provider) => provider,
            None => Arc::new(OpenRouterProvider::new(self.settings.clone(), self.timeout)?),
        };
        Ok(VitwiSdk {
            storage,
            settings: self.settings,
            provider,
            host: self.host,
        })
    }
}

// ---------------------------------------------------------------------------
// VitwiSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Vitwi SDK.
///
/// Owns local storage, the completion provider and the host bridge, and
/// exposes the stores as lightweight borrowing wrappers.
///
/// Created via [`VitwiSdk::builder()`].
pub struct VitwiSdk {
    storage: LocalStorage,
    settings: ApiSettings,
    provider: Arc<dyn LlmProvider>,
    host: Arc<dyn HostBridge>,
}

impl VitwiSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> VitwiSdkBuilder {
        VitwiSdkBuilder::default()
    }

    // -- Store accessors ---------------------------------------------------

    /// Access the saved recipe store.
    pub fn recipes(&self) -> RecipeStore<'_> {
        RecipeStore::new(&self.storage)
    }

    /// Access the shopping cart.
    pub fn cart(&self) -> CartStore<'_> {
        CartStore::new(&self.storage)
    }

    /// Access the underlying key/value storage.
    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    // -- Model requests ----------------------------------------------------

    /// Access the analysis and generation requester.
    pub fn requester(&self) -> RecipeRequester<'_> {
        RecipeRequester::new(self.provider.as_ref(), &self.settings)
    }

    /// Analyze recipe text. See [`RecipeRequester::analyze`].
    pub fn analyze(&self, recipe_text: &str) -> Result<RecipeAnalysis> {
        self.requester().analyze(recipe_text)
    }

    /// Generate recipes for a preference query. See [`RecipeRequester::generate`].
    pub fn generate(&self, query: &str) -> Result<Vec<RecipeAnalysis>> {
        self.requester().generate(query)
    }

    // -- Configuration -----------------------------------------------------

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Whether the API settings allow requests to be made.
    pub fn is_configured(&self) -> bool {
        self.settings.validate().is_ok()
    }

    pub fn host(&self) -> &dyn HostBridge {
        self.host.as_ref()
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.host.show_alert(&notice.message());
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for VitwiSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VitwiSdk(storage_dir={}, model={}, configured={})",
            self.storage.dir.display(),
            self.provider.model_name(),
            self.is_configured()
        )
    }
}
