//! Provider/model choice made on the settings page.

use crate::llm::Provider;
use modelgate_types::{ProviderSettings, SettingsView};

/// Placeholder for the model field when the provider has no preset model.
pub const MODEL_PLACEHOLDER: &str = "Enter model name";

/// The provider a user picked and the model field alongside it.
///
/// An empty model means "use the provider default" at resolution time.
/// Only OpenRouter pre-fills the model field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSelection {
    pub provider: Provider,
    pub model: String,
}

impl ProviderSelection {
    /// Rebuild a selection from previously saved values.
    pub fn restore(saved_provider: Option<&str>, saved_model: Option<&str>) -> Self {
        let Some(name) = saved_provider.filter(|p| !p.is_empty()) else {
            return Self::default();
        };
        let provider = Provider::parse(name);
        let saved_model = saved_model.filter(|m| !m.is_empty());
        let model = match (provider, saved_model) {
            (_, Some(m)) => m.to_string(),
            (Provider::OpenRouter, None) => Provider::OpenRouter.default_model().to_string(),
            (_, None) => String::new(),
        };
        Self { provider, model }
    }

    /// Switch provider, resetting the model field.
    pub fn select_provider(&mut self, provider: Provider) {
        self.provider = provider;
        self.model = preset_model(provider);
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn model_placeholder(&self) -> &'static str {
        match self.provider {
            Provider::OpenRouter => Provider::OpenRouter.default_model(),
            _ => MODEL_PLACEHOLDER,
        }
    }

    /// One-line description, e.g. `Selected provider: openai, Model: default`.
    pub fn summary(&self) -> String {
        let model = if self.model.is_empty() {
            "default"
        } else {
            self.model.as_str()
        };
        format!("Selected provider: {}, Model: {}", self.provider, model)
    }

    /// Settings-form payload: the selection plus its placeholder and summary.
    pub fn view(&self) -> SettingsView {
        SettingsView {
            settings: ProviderSettings::from(self),
            model_placeholder: self.model_placeholder().to_string(),
            summary: self.summary(),
        }
    }
}

fn preset_model(provider: Provider) -> String {
    match provider {
        Provider::OpenRouter => provider.default_model().to_string(),
        _ => String::new(),
    }
}

impl From<&ProviderSelection> for ProviderSettings {
    fn from(selection: &ProviderSelection) -> Self {
        Self {
            provider: selection.provider.to_string(),
            model: selection.model.clone(),
        }
    }
}

impl From<&ProviderSettings> for ProviderSelection {
    fn from(settings: &ProviderSettings) -> Self {
        Self {
            provider: Provider::parse(&settings.provider),
            model: settings.model.clone(),
        }
    }
}
