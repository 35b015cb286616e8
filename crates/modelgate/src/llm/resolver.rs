//! Provider/model resolution.
//!
//! Maps a provider name and optional model override to the model to use
//! and the credential it needs. An explicit non-empty model wins over the
//! provider default; unknown providers resolve as OpenAI.

use tracing::{debug, warn};

use super::env::LlmEnv;
use super::error::ConfigurationError;
use super::provider::Provider;
use crate::settings::ProviderSelection;

/// Outcome of the pure resolution step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelChoice {
    pub provider: Provider,
    pub model: String,
    pub credential_var: &'static str,
}

/// Pure resolution from a provider name and optional model override.
pub fn resolve_model(provider: &str, explicit_model: Option<&str>) -> ModelChoice {
    choose(Provider::parse(provider), explicit_model)
}

fn choose(provider: Provider, explicit_model: Option<&str>) -> ModelChoice {
    let model = explicit_model
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| provider.default_model());
    ModelChoice {
        provider,
        model: model.to_string(),
        credential_var: provider.credential_var(),
    }
}

/// A model choice paired with the credential that authorizes it.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    pub provider: Provider,
    pub model: String,
    pub credential_var: &'static str,
    pub api_key: String,
}

impl std::fmt::Debug for ResolvedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedModel")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("credential_var", &self.credential_var)
            .finish_non_exhaustive()
    }
}

/// Resolves models against a fixed set of credentials.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    env: LlmEnv,
}

impl Resolver {
    pub fn new(env: LlmEnv) -> Self {
        Self { env }
    }

    /// Resolve using `LLM_PROVIDER` and `LLM_MODEL` from the captured environment.
    pub fn resolve(&self) -> Result<ResolvedModel, ConfigurationError> {
        let choice = resolve_model(
            self.env.provider.as_deref().unwrap_or_default(),
            self.env.model.as_deref(),
        );
        self.authorize(choice)
    }

    /// Resolve a stored settings selection.
    pub fn resolve_selection(
        &self,
        selection: &ProviderSelection,
    ) -> Result<ResolvedModel, ConfigurationError> {
        self.authorize(choose(selection.provider, Some(selection.model.as_str())))
    }

    fn authorize(&self, choice: ModelChoice) -> Result<ResolvedModel, ConfigurationError> {
        let Some(api_key) = self.env.credential(choice.credential_var) else {
            warn!(
                provider = %choice.provider,
                credential = choice.credential_var,
                "LLM credential not configured"
            );
            return Err(ConfigurationError::MissingCredential(choice.credential_var));
        };

        debug!(provider = %choice.provider, model = %choice.model, "Resolved LLM model");
        Ok(ResolvedModel {
            provider: choice.provider,
            model: choice.model,
            credential_var: choice.credential_var,
            api_key: api_key.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
