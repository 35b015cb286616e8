//! Modelgate - auth form validation and LLM provider selection service.

pub mod build_info;
pub mod config;
pub mod forms;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
pub mod settings;
