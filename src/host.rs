//! Interface to the messaging platform hosting the assistant.
//!
//! The SDK only consumes the host: it asks for the user and any forwarded
//! message text, and reports notices and haptic feedback through it. Every
//! method is best-effort and defaults to doing nothing, so an SDK without a
//! host (tests, CLIs) behaves exactly like one whose host lacks a feature.

use serde::{Deserialize, Serialize};

/// The platform user the assistant runs for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

pub trait HostBridge: Send + Sync {
    fn user_data(&self) -> Option<UserData> {
        None
    }

    /// Text of a message the user forwarded to the assistant, if any.
    fn forwarded_message_text(&self) -> Option<String> {
        None
    }

    fn show_alert(&self, _message: &str) {}

    fn vibrate(&self) {}
}

/// A host with no capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl HostBridge for NoopHost {}
