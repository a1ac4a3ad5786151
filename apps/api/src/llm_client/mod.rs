/// LLM Client: the single point of entry for all Claude API calls in SkillBridge.
///
/// No other module may call the Anthropic API directly. Handlers depend on the
/// `TextGenerator` trait so tests can substitute a stub.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_RETRIES: u32 = 3;
/// Floor for the token cap of the shortened retry after an empty answer.
const MIN_RETRY_TOKENS: u32 = 512;
const BREVITY_HINT: &str = "\n\nReturn under ~600 words.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Free-text generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, system: &str, max_tokens: u32)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Joins all non-blank text blocks; `None` when there are none.
    pub fn text(&self) -> Option<String> {
        let chunks: Vec<&str> = self
            .content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if chunks.is_empty() {
            None
        } else {
            Some(chunks.join("\n"))
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
            api_key,
        })
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    /// Returns the model's text. An empty answer is retried once with a smaller
    /// token cap and a brevity hint before giving up.
    async fn generate(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        if let Some(text) = self.call(prompt, system, max_tokens).await?.text() {
            return Ok(text);
        }

        warn!("LLM returned empty text, retrying with a shorter answer");
        let (brief_prompt, brief_tokens) = brevity_retry(prompt, max_tokens);
        self.call(&brief_prompt, system, brief_tokens)
            .await?
            .text()
            .ok_or(LlmError::EmptyContent)
    }
}

fn brevity_retry(prompt: &str, max_tokens: u32) -> (String, u32) {
    (
        format!("{prompt}{BREVITY_HINT}"),
        (max_tokens / 2).max(MIN_RETRY_TOKENS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(blocks: &[(&str, Option<&str>)]) -> LlmResponse {
        LlmResponse {
            content: blocks
                .iter()
                .map(|(t, text)| ContentBlock {
                    block_type: t.to_string(),
                    text: text.map(String::from),
                })
                .collect(),
            usage: Usage {
                input_tokens: 1,
                output_tokens: 1,
            },
        }
    }

    #[test]
    fn test_text_joins_text_blocks() {
        let r = response(&[("text", Some(" first ")), ("tool_use", None), ("text", Some("second"))]);
        assert_eq!(r.text().as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn test_blank_text_is_none() {
        assert!(response(&[("text", Some("   "))]).text().is_none());
        assert!(response(&[]).text().is_none());
    }

    #[test]
    fn test_brevity_retry_halves_tokens_with_floor() {
        let (prompt, tokens) = brevity_retry("Plan my week.", 2048);
        assert!(prompt.starts_with("Plan my week."));
        assert!(prompt.ends_with("Return under ~600 words."));
        assert_eq!(tokens, 1024);
        assert_eq!(brevity_retry("x", 600).1, MIN_RETRY_TOKENS);
    }

    #[test]
    fn test_response_deserializes() {
        let json = r#"{
            "content": [{ "type": "text", "text": "hello" }],
            "usage": { "input_tokens": 10, "output_tokens": 2 }
        }"#;
        let r: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.text().as_deref(), Some("hello"));
        assert_eq!(r.usage.output_tokens, 2);
    }
}
