//! LLM provider resolution and chat clients.

mod anthropic;
mod env;
mod error;
mod factory;
mod openai;
mod provider;
mod resolver;
mod types;

pub use anthropic::AnthropicProvider;
pub use env::{LLM_MODEL, LLM_PROVIDER, LlmEnv};
pub use error::{ConfigurationError, LLMError};
pub use factory::{build_provider, endpoint_for};
pub use openai::OpenAICompatibleProvider;
pub use provider::{ANTHROPIC_API_KEY, LLMProvider, OPENAI_API_KEY, Provider};
pub use resolver::{ModelChoice, ResolvedModel, Resolver, resolve_model};
pub use types::{ChatRequest, ChatResponse, Choice, Message, Role, Usage};
