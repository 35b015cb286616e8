//! Anthropic chat client with native API format.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::{ChatRequest, ChatResponse, Choice, Message, Role, Usage};

pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AnthropicProvider {
    pub const API_VERSION: &'static str = "2023-06-01";
    const DEFAULT_MAX_TOKENS: u32 = 4096;

    #[must_use]
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError> {
        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", Self::API_VERSION)
            .json(&to_request(&request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        let body: Response = response.json().await?;
        Ok(from_response(body))
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Serialize)]
struct Request {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct Response {
    id: String,
    content: Vec<Content>,
    stop_reason: Option<String>,
    usage: Option<ResponseUsage>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ResponseUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// System messages move to the top-level `system` field; multiple are
/// joined with blank lines.
fn to_request(request: &ChatRequest) -> Request {
    let mut system: Option<String> = None;
    let mut messages = Vec::with_capacity(request.messages.len());

    for msg in &request.messages {
        match msg.role {
            Role::System => match system.as_mut() {
                Some(s) => {
                    s.push_str("\n\n");
                    s.push_str(&msg.content);
                }
                None => system = Some(msg.content.clone()),
            },
            Role::User | Role::Assistant => messages.push(msg.clone()),
        }
    }

    Request {
        model: request.model.clone(),
        max_tokens: request
            .max_tokens
            .unwrap_or(AnthropicProvider::DEFAULT_MAX_TOKENS),
        system,
        messages,
        temperature: request.temperature,
    }
}

fn from_response(response: Response) -> ChatResponse {
    let content = response
        .content
        .into_iter()
        .filter(|c| c.content_type == "text")
        .map(|c| c.text)
        .collect::<String>();

    ChatResponse {
        id: response.id,
        choices: vec![Choice {
            index: 0,
            message: Message {
                role: Role::Assistant,
                content,
            },
            finish_reason: response.stop_reason,
        }],
        usage: response.usage.map(|u| Usage {
            prompt_tokens: u.input_tokens,
            completion_tokens: u.output_tokens,
            total_tokens: u.input_tokens + u.output_tokens,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_messages_are_lifted() {
        let request = ChatRequest {
            model: "claude-3-5-sonnet-latest".to_string(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: "Be brief.".to_string(),
                },
                Message {
                    role: Role::User,
                    content: "Hello".to_string(),
                },
                Message {
                    role: Role::System,
                    content: "Answer in English.".to_string(),
                },
            ],
            temperature: None,
            max_tokens: None,
        };

        let converted = to_request(&request);
        assert_eq!(
            converted.system.as_deref(),
            Some("Be brief.\n\nAnswer in English.")
        );
        assert_eq!(converted.messages.len(), 1);
        assert_eq!(converted.max_tokens, 4096);

        let json = serde_json::to_value(&converted).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn response_text_blocks_are_joined() {
        let body: Response = serde_json::from_str(
            r#"{
                "id": "msg_1",
                "content": [
                    {"type": "text", "text": "Hel"},
                    {"type": "tool_use"},
                    {"type": "text", "text": "lo"}
                ],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 4, "output_tokens": 2}
            }"#,
        )
        .unwrap();

        let response = from_response(body);
        assert_eq!(response.content(), "Hello");
        assert_eq!(response.choices[0].message.role, Role::Assistant);
        assert_eq!(response.usage.unwrap().total_tokens, 6);
    }
}
