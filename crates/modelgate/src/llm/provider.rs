//! LLM provider enumeration and client trait.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::LLMError;
use super::types::{ChatRequest, ChatResponse};

/// Environment variable holding the OpenAI key (also used for OpenRouter).
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable holding the Anthropic key.
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAI,
    Anthropic,
    OpenRouter,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::OpenAI, Provider::Anthropic, Provider::OpenRouter];

    /// Parse a provider name. Matching is exact; anything unrecognized
    /// (including the empty string) is treated as OpenAI.
    pub fn parse(name: &str) -> Self {
        match name {
            "anthropic" => Provider::Anthropic,
            "openrouter" => Provider::OpenRouter,
            _ => Provider::OpenAI,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
            Provider::OpenRouter => "openrouter",
        }
    }

    /// Model used when no explicit model is given.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAI => "o3-mini",
            Provider::Anthropic => "claude-3-5-sonnet-latest",
            Provider::OpenRouter => "deepseek-r1-disitill-qwen-32b",
        }
    }

    /// Name of the environment variable that must hold this provider's key.
    pub fn credential_var(&self) -> &'static str {
        match self {
            Provider::OpenAI | Provider::OpenRouter => OPENAI_API_KEY,
            Provider::Anthropic => ANTHROPIC_API_KEY,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chat client for one provider's wire format.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Make a chat completion request.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError>;
}
