//! LLM settings read from the process environment.

use super::provider::{ANTHROPIC_API_KEY, OPENAI_API_KEY};

pub const LLM_PROVIDER: &str = "LLM_PROVIDER";
pub const LLM_MODEL: &str = "LLM_MODEL";

/// Snapshot of the LLM-related environment.
///
/// Built once and handed to the resolver so resolution never touches
/// global state. Empty values are stored as `None`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LlmEnv {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl LlmEnv {
    /// Capture `LLM_PROVIDER`, `LLM_MODEL`, `OPENAI_API_KEY` and `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            provider: get(LLM_PROVIDER),
            model: get(LLM_MODEL),
            openai_api_key: get(OPENAI_API_KEY),
            anthropic_api_key: get(ANTHROPIC_API_KEY),
        }
    }

    /// Look up a credential by its variable name.
    pub fn credential(&self, var: &str) -> Option<&str> {
        match var {
            OPENAI_API_KEY => self.openai_api_key.as_deref(),
            ANTHROPIC_API_KEY => self.anthropic_api_key.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Debug for LlmEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmEnv")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_keys() {
        let env = LlmEnv::from_lookup(lookup(&[
            ("LLM_PROVIDER", "anthropic"),
            ("LLM_MODEL", "claude-2"),
            ("OPENAI_API_KEY", "sk-openai"),
            ("ANTHROPIC_API_KEY", "sk-ant"),
        ]));
        assert_eq!(env.provider.as_deref(), Some("anthropic"));
        assert_eq!(env.model.as_deref(), Some("claude-2"));
        assert_eq!(env.credential("OPENAI_API_KEY"), Some("sk-openai"));
        assert_eq!(env.credential("ANTHROPIC_API_KEY"), Some("sk-ant"));
    }

    #[test]
    fn empty_values_are_absent() {
        let env = LlmEnv::from_lookup(lookup(&[("LLM_PROVIDER", ""), ("OPENAI_API_KEY", "")]));
        assert!(env.provider.is_none());
        assert!(env.credential("OPENAI_API_KEY").is_none());
    }

    #[test]
    fn unknown_credential_var() {
        let env = LlmEnv::default();
        assert!(env.credential("OPENROUTER_API_KEY").is_none());
    }

    #[test]
    fn debug_redacts_keys() {
        let env = LlmEnv {
            openai_api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let out = format!("{env:?}");
        assert!(!out.contains("sk-secret"));
        assert!(out.contains("***"));
    }
}
