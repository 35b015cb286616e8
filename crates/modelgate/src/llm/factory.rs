//! Builds a chat client for a resolved model.

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use super::anthropic::AnthropicProvider;
use super::openai::OpenAICompatibleProvider;
use super::provider::{LLMProvider, Provider};
use super::resolver::ResolvedModel;
use crate::config::EndpointsConfig;

/// Base URL for a provider's API.
pub fn endpoint_for(provider: Provider, endpoints: &EndpointsConfig) -> &str {
    match provider {
        Provider::OpenAI => &endpoints.openai,
        Provider::Anthropic => &endpoints.anthropic,
        Provider::OpenRouter => &endpoints.openrouter,
    }
}

/// Create the client matching the resolved provider. OpenAI and OpenRouter
/// share the OpenAI-compatible wire format.
pub fn build_provider(
    client: Client,
    resolved: &ResolvedModel,
    endpoints: &EndpointsConfig,
) -> Arc<dyn LLMProvider> {
    let base_url = endpoint_for(resolved.provider, endpoints).to_string();
    info!(provider = %resolved.provider, model = %resolved.model, %base_url, "Built LLM client");

    match resolved.provider {
        Provider::Anthropic => Arc::new(AnthropicProvider::new(
            client,
            base_url,
            resolved.api_key.clone(),
        )),
        Provider::OpenAI | Provider::OpenRouter => Arc::new(OpenAICompatibleProvider::new(
            client,
            base_url,
            resolved.api_key.clone(),
        )),
    }
}
