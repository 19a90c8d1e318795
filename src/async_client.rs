//! Async wrapper around [`VitwiSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the model.
//!
//! # Example
//!
//! ```no_run
//! use vitwi_sdk::{ApiSettings, AsyncVitwiSdk};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncVitwiSdk::builder()
//!         .settings(ApiSettings::from_env())
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let recipe = sdk.analyze("Блины: мука, молоко, яйца").await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let saved = sdk.run(move |s| s.recipes().save(&recipe)).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ApiSettings;
use crate::error::{Result, VitwiError};
use crate::host::HostBridge;
use crate::llm::LlmProvider;
use crate::models::RecipeAnalysis;
use crate::VitwiSdk;

// ---------------------------------------------------------------------------
// AsyncVitwiSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncVitwiSdk`] instance.
pub struct AsyncVitwiSdkBuilder {
    storage_dir: Option<PathBuf>,
    settings: ApiSettings,
    timeout: Duration,
    provider: Option<Arc<dyn LlmProvider>>,
    host: Option<Arc<dyn HostBridge>>,
}

impl Default for AsyncVitwiSdkBuilder {
    fn default() -> Self {
        Self {
            storage_dir: None,
            settings: ApiSettings::default(),
            timeout: Duration::from_secs(120),
            provider: None,
            host: None,
        }
    }
}

impl AsyncVitwiSdkBuilder {
    /// Set a custom storage directory.
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the API credential, endpoint and model.
    pub fn settings(mut self, settings: ApiSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the HTTP request timeout for model requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn host(mut self, host: Arc<dyn HostBridge>) -> Self {
        self.host = Some(host);
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool since it touches the
    /// filesystem and builds a blocking HTTP client.
    pub async fn build(self) -> Result<AsyncVitwiSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = VitwiSdk::builder()
                .settings(self.settings)
                .timeout(self.timeout);
            if let Some(dir) = self.storage_dir {
                builder = builder.storage_dir(dir);
            }
            if let Some(provider) = self.provider {
                builder = builder.provider(provider);
            }
            if let Some(host) = self.host {
                builder = builder.host(host);
            }
            let sdk = builder.build()?;
            Ok(AsyncVitwiSdk {
                inner: Arc::new(sdk),
                stores: Arc::new(Mutex::new(())),
            })
        })
        .await
        .map_err(|e| VitwiError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncVitwiSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`VitwiSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. Closures passed to [`run()`](Self::run)
/// are serialized by a mutex so store read-modify-write cycles never
/// interleave. Model requests ([`analyze()`](Self::analyze),
/// [`generate()`](Self::generate)) do not take it, so stores stay usable
/// while a request is in flight.
#[derive(Clone)]
pub struct AsyncVitwiSdk {
    inner: Arc<VitwiSdk>,
    stores: Arc<Mutex<()>>,
}

impl AsyncVitwiSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncVitwiSdkBuilder {
        AsyncVitwiSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&VitwiSdk` reference and should return
    /// a `Result<T>`. Calls run one at a time.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use vitwi_sdk::AsyncVitwiSdk;
    /// # async fn example() -> vitwi_sdk::Result<()> {
    /// # let sdk = AsyncVitwiSdk::builder().build().await?;
    /// let tags = sdk.run(|s| Ok(s.recipes().popular_tags(None))).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&VitwiSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let stores = self.stores.clone();
        self.blocking(move |sdk| {
            let _guard = stores
                .lock()
                .map_err(|_| VitwiError::InvalidArgument("SDK lock poisoned".into()))?;
            f(sdk)
        })
        .await
    }

    async fn blocking<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&VitwiSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| VitwiError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Analyze recipe text asynchronously.
    pub async fn analyze(&self, recipe_text: &str) -> Result<RecipeAnalysis> {
        let text = recipe_text.to_string();
        self.blocking(move |s| s.analyze(&text)).await
    }

    /// Generate recipes for a preference query asynchronously.
    pub async fn generate(&self, query: &str) -> Result<Vec<RecipeAnalysis>> {
        let query = query.to_string();
        self.blocking(move |s| s.generate(&query)).await
    }

    /// Close the SDK, dropping this handle on the blocking pool.
    ///
    /// The blocking HTTP client must not be dropped from inside the async
    /// runtime. Clones keep the SDK alive until they are closed too.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| VitwiError::InvalidArgument(format!("Task join error: {e}")))
    }
}
