use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::{Collaborator, Reply, TokenUsage};
use crate::config::CollaboratorConfig;
use crate::consts::API_KEY_ENV;
use crate::error::CollaboratorError;
use crate::session::{Role, Turn};

/// A collaborator that calls Groq's OpenAI-compatible chat completions API.
pub struct GroqCollaborator {
    client: reqwest::Client,
    config: CollaboratorConfig,
    url: String,
}

impl GroqCollaborator {
    pub fn new(config: CollaboratorConfig) -> Result<Self, CollaboratorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let url = format!("{}/chat/completions", config.endpoint.trim_end_matches('/'));
        Ok(Self {
            client,
            config,
            url,
        })
    }

    fn build_messages(system_prompt: &str, history: &[Turn], user_text: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        for turn in history {
            let role = match turn.role {
                Role::User => "user",
                Role::Bot => "assistant",
            };
            messages.push(Message {
                role: role.to_string(),
                content: turn.content.clone(),
            });
        }
        messages.push(Message {
            role: "user".to_string(),
            content: user_text.to_string(),
        });
        messages
    }

    fn parse_response(api_resp: ApiResponse) -> Result<Reply, CollaboratorError> {
        let text = api_resp
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(CollaboratorError::EmptyResponse)?;

        let usage = api_resp.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        });

        Ok(Reply { text, usage })
    }
}

#[async_trait]
impl Collaborator for GroqCollaborator {
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_text: &str,
    ) -> Result<Reply, CollaboratorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CollaboratorError::MissingCredential {
                env_var: API_KEY_ENV,
            })?;

        let messages = Self::build_messages(system_prompt, history, user_text);
        let body = ApiRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        };

        debug!(
            model = %self.config.model,
            history = history.len(),
            "POST {}", self.url
        );

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, "Groq API error");
            return Err(CollaboratorError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        let api_resp: ApiResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CollaboratorError::Decode(e.to_string()))?;

        let reply = Self::parse_response(api_resp)?;
        if let Some(usage) = reply.usage {
            debug!(
                input = usage.input_tokens,
                output = usage.output_tokens,
                "token usage"
            );
        }
        Ok(reply)
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Reply, CollaboratorError> {
        let api_resp: ApiResponse = serde_json::from_str(json).unwrap();
        GroqCollaborator::parse_response(api_resp)
    }

    #[test]
    fn parse_text_and_usage() {
        let reply = parse(
            r#"{
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Happy to help!"}}],
                "usage": {"prompt_tokens": 120, "completion_tokens": 8, "total_tokens": 128}
            }"#,
        )
        .unwrap();
        assert_eq!(reply.text, "Happy to help!");
        assert_eq!(
            reply.usage,
            Some(TokenUsage {
                input_tokens: 120,
                output_tokens: 8
            })
        );
    }

    #[test]
    fn parse_without_usage() {
        let reply = parse(r#"{"choices": [{"message": {"content": "ok"}}]}"#).unwrap();
        assert_eq!(reply.text, "ok");
        assert!(reply.usage.is_none());
    }

    #[test]
    fn parse_no_choices_fails() {
        let err = parse(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, CollaboratorError::EmptyResponse));
    }

    #[test]
    fn parse_blank_content_fails() {
        let err = parse(r#"{"choices": [{"message": {"content": "  "}}]}"#).unwrap_err();
        assert!(matches!(err, CollaboratorError::EmptyResponse));
    }

    #[test]
    fn parse_null_content_fails() {
        let err = parse(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap_err();
        assert!(matches!(err, CollaboratorError::EmptyResponse));
    }

    #[test]
    fn build_messages_maps_roles() {
        let history = vec![Turn::bot("welcome"), Turn::user("where is it?")];
        let messages = GroqCollaborator::build_messages("be nice", &history, "thanks");
        let roles: Vec<_> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["system", "assistant", "user", "user"]);
        assert_eq!(messages[0].content, "be nice");
        assert_eq!(messages[3].content, "thanks");
    }

    #[test]
    fn build_messages_empty_history() {
        let messages = GroqCollaborator::build_messages("sys", &[], "hi");
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn request_serializes_generation_parameters() {
        let messages = GroqCollaborator::build_messages("sys", &[], "hi");
        let body = ApiRequest {
            model: "llama-3.3-70b-versatile",
            messages: &messages,
            temperature: 0.5,
            max_tokens: 500,
            top_p: 1.0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let groq = GroqCollaborator::new(CollaboratorConfig::default()).unwrap();
        assert!(!groq.is_configured());
        let err = groq.generate("sys", &[], "hi").await.unwrap_err();
        assert!(matches!(
            err,
            CollaboratorError::MissingCredential {
                env_var: "GROQ_API_KEY"
            }
        ));
    }

    #[tokio::test]
    async fn url_joins_endpoint() {
        let config = CollaboratorConfig {
            endpoint: "http://localhost:8080/v1/".to_string(),
            ..CollaboratorConfig::default()
        };
        let groq = GroqCollaborator::new(config).unwrap();
        assert_eq!(groq.url, "http://localhost:8080/v1/chat/completions");
        assert_eq!(groq.model(), "llama-3.3-70b-versatile");
    }
}
