//! Shared test fixtures for the Vitwi SDK integration tests.
//!
//! Provides `setup_sdk()` which builds an SDK over a temporary storage
//! directory, answering model requests from a `FakeProvider` and recording
//! host notices in a `RecordingHost`.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vitwi_sdk::{ApiSettings, FakeProvider, HostBridge, RecipeAnalysis, VitwiSdk};

/// An SDK wired to `fake`, with its provider and host kept for inspection.
pub struct TestSdk {
    pub sdk: VitwiSdk,
    pub fake: Arc<FakeProvider>,
    pub host: Arc<RecordingHost>,
}

/// Create a `VitwiSdk` backed by a temporary storage directory.
///
/// Returns `(TestSdk, tempfile::TempDir)`. The caller must keep the `TempDir`
/// alive for the duration of the test so the storage directory is not deleted
/// prematurely.
pub fn setup_sdk(fake: FakeProvider) -> (TestSdk, tempfile::TempDir) {
    setup_sdk_with(fake, ApiSettings::with_key("test-key"), RecordingHost::default())
}

pub fn setup_sdk_with(
    fake: FakeProvider,
    settings: ApiSettings,
    host: RecordingHost,
) -> (TestSdk, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let fake = Arc::new(fake);
    let host = Arc::new(host);
    let sdk = VitwiSdk::builder()
        .storage_dir(tmp_dir.path())
        .settings(settings)
        .provider(fake.clone())
        .host(host.clone())
        .build()
        .unwrap();
    (TestSdk { sdk, fake, host }, tmp_dir)
}

/// An SDK for store tests; any model request fails.
pub fn setup_offline_sdk() -> (TestSdk, tempfile::TempDir) {
    setup_sdk(FakeProvider::new())
}

// ---------------------------------------------------------------------------
// RecordingHost
// ---------------------------------------------------------------------------

/// Host bridge that records alerts and counts vibrations.
#[derive(Default)]
pub struct RecordingHost {
    pub forwarded: Option<String>,
    alerts: Mutex<Vec<String>>,
    vibrations: AtomicUsize,
}

impl RecordingHost {
    pub fn forwarding(text: &str) -> Self {
        Self {
            forwarded: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        self.alerts.lock().unwrap().last().cloned()
    }

    pub fn vibrations(&self) -> usize {
        self.vibrations.load(Ordering::SeqCst)
    }
}

impl HostBridge for RecordingHost {
    fn forwarded_message_text(&self) -> Option<String> {
        self.forwarded.clone()
    }

    fn show_alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn vibrate(&self) {
        self.vibrations.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// Model reply for a three-egg omelette: 2 servings, 400 g, totals only.
pub fn omelette_reply() -> String {
    let body = serde_json::json!({
        "dishName": "Омлет",
        "servings": 2,
        "totalWeight": 400,
        "difficulty": "Легко",
        "cookingTime": "15 минут",
        "ingredients": ["Яйца 3 шт", "Молоко 50 мл", "Соль по вкусу"],
        "nutrition": {"calories": 600, "proteins": 40, "fats": 44, "carbs": 8},
        "instructions": [
            {"step": 1, "title": "Взбить", "description": "Взбейте яйца с молоком и солью."},
            {"step": 2, "title": "Обжарить", "description": "Жарьте на сковороде под крышкой 5 минут."}
        ],
        "tags": ["завтрак", "быстро"]
    });
    format!("Вот анализ вашего рецепта:\n```json\n{body}\n```\nПриятного аппетита!")
}

/// A finished recipe for store tests.
pub fn recipe(name: &str, ingredients: &[&str], tags: &[&str]) -> RecipeAnalysis {
    serde_json::from_value(serde_json::json!({
        "dishName": name,
        "ingredients": ingredients,
        "tags": tags,
        "instructions": [{"step": 1, "title": "Готовить", "description": "Приготовьте."}]
    }))
    .unwrap()
}
