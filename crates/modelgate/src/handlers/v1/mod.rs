//! V1 API handlers.

mod auth;
mod settings;

pub use auth::{login, register};
pub use settings::{get_llm_provider, put_llm_provider, resolved_llm_provider, update_llm_provider};
