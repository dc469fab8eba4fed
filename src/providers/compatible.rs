//! OpenAI-compatible chat completions client.
//! DeepSeek and most hosted models accept the same `/chat/completions` shape,
//! so a single implementation covers them.

use super::{Provider, build_provider_client, sanitize_api_error};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct OpenAiCompatibleProvider {
    pub(crate) name: String,
    pub(crate) base_url: String,
    api_key: Option<String>,
    max_tokens: u32,
    /// Pre-computed `Authorization` header value.
    cached_auth: Option<String>,
    cached_chat_url: String,
    client: Client,
}

impl OpenAiCompatibleProvider {
    pub fn new(
        name: &str,
        base_url: &str,
        api_key: Option<&str>,
        max_tokens: u32,
        timeout_secs: u64,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let cached_chat_url = if base_url.ends_with("chat/completions") {
            base_url.clone()
        } else {
            format!("{base_url}/chat/completions")
        };
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(ToString::to_string);

        Self {
            name: name.to_string(),
            base_url,
            cached_auth: api_key.as_ref().map(|k| format!("Bearer {k}")),
            api_key,
            max_tokens,
            cached_chat_url,
            client: build_provider_client(timeout_secs),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_chat_text(response: ChatResponse, provider_name: &str) -> anyhow::Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| anyhow::anyhow!("No response from {provider_name}"))
}

#[async_trait]
impl Provider for OpenAiCompatibleProvider {
    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String> {
        let Some(auth) = self.cached_auth.as_deref() else {
            anyhow::bail!(
                "{} API key not set. Set ZENTAO_API_KEY or api_key in config.toml.",
                self.name
            );
        };

        let mut messages = Vec::with_capacity(2);
        if let Some(sys) = system_prompt {
            messages.push(Message {
                role: "system",
                content: sys.to_string(),
            });
        }
        messages.push(Message {
            role: "user",
            content: message.to_string(),
        });

        let request = ChatRequest {
            model: model.to_string(),
            messages,
            temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.cached_chat_url)
            .header("Authorization", auth)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("{} chat completions request failed", self.name))?;

        let status = response.status();
        if !status.is_success() {
            let error = response.text().await.unwrap_or_default();
            let sanitized = sanitize_api_error(&error);
            anyhow::bail!("{} API error ({status}): {sanitized}", self.name);
        }

        let chat: ChatResponse = response
            .json()
            .await
            .with_context(|| format!("{} chat completions JSON decode failed", self.name))?;

        extract_chat_text(chat, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_provider(url: &str, key: Option<&str>) -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new("deepseek", url, key, 1000, 5)
    }

    #[test]
    fn builds_chat_url_from_base() {
        let p = make_provider("https://api.deepseek.com/v1/", None);
        assert_eq!(p.base_url, "https://api.deepseek.com/v1");
        assert_eq!(p.cached_chat_url, "https://api.deepseek.com/v1/chat/completions");

        let p = make_provider("https://proxy.local/chat/completions", None);
        assert_eq!(p.cached_chat_url, "https://proxy.local/chat/completions");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(!make_provider("https://example.com", Some("  ")).has_api_key());
        assert!(make_provider("https://example.com", Some("sk-1")).has_api_key());
    }

    #[tokio::test]
    async fn chat_fails_without_key() {
        let p = make_provider("https://api.deepseek.com/v1", None);
        let err = p
            .chat_with_system(None, "hola", "deepseek-chat", 0.7)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("deepseek API key not set"));
    }

    #[test]
    fn request_carries_max_tokens() {
        let req = ChatRequest {
            model: "deepseek-chat".into(),
            messages: vec![Message {
                role: "user",
                content: "hola".into(),
            }],
            temperature: 0.7,
            max_tokens: 1000,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let resp: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = extract_chat_text(resp, "deepseek").unwrap_err();
        assert_eq!(err.to_string(), "No response from deepseek");
    }

    #[tokio::test]
    async fn chat_round_trip_against_mock() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "deepseek-chat",
                "max_tokens": 1000,
                "messages": [
                    {"role": "system", "content": "sé directo"},
                    {"role": "user", "content": "hola"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "Hola, vamos al grano."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let p = make_provider(&server.uri(), Some("sk-test"));
        let reply = p
            .chat_with_system(Some("sé directo"), "hola", "deepseek-chat", 0.7)
            .await
            .unwrap();
        assert_eq!(reply, "Hola, vamos al grano.");
    }

    #[tokio::test]
    async fn api_error_is_scrubbed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string("bad key sk-test-secret-value"),
            )
            .mount(&server)
            .await;

        let p = make_provider(&server.uri(), Some("sk-test-secret-value"));
        let err = p.chat("hola", "deepseek-chat", 0.7).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("deepseek API error (401"));
        assert!(message.contains("[REDACTED]"));
        assert!(!message.contains("secret-value"));
    }
}
