//! LLM provider settings: the user's selection and its persistence.

mod error;
mod selection;
mod store;

pub use error::{SettingsError, SettingsResult};
pub use selection::{MODEL_PLACEHOLDER, ProviderSelection};
pub use store::{SAVED_MESSAGE, SettingsStore};
