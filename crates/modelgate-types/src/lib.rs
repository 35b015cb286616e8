//! Wire types for the modelgate HTTP API.
//!
//! Shared by the server and by anything that talks to it. Provider names
//! travel as plain strings; the server maps unknown names to its default
//! provider.

use serde::{Deserialize, Serialize};

// ============================================================================
// Auth forms
// ============================================================================

/// Body of `POST /api/v1/auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /api/v1/auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

// ============================================================================
// Provider settings
// ============================================================================

/// A provider/model pair as stored on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub provider: String,
    #[serde(default)]
    pub model: String,
}

/// Body of `GET /api/v1/settings/llm-provider`: the saved selection plus
/// the hints the settings form displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsView {
    pub settings: ProviderSettings,
    pub model_placeholder: String,
    pub summary: String,
}

/// Body of `PUT /api/v1/settings/llm-provider`.
///
/// When `model` is omitted the server applies the provider's default
/// selection behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Body of `POST /api/update-llm-provider`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProviderRequest {
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: ProviderSettings,
    pub message: String,
}

/// Result of resolving the stored selection. Never carries the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModelResponse {
    pub provider: String,
    pub model: String,
    pub credential_var: String,
}

// ============================================================================
// Generic responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
}
