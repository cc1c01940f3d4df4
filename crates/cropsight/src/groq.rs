//! Chat-completion client for the Groq hosted API
//!
//! Thin reqwest wrapper speaking the OpenAI-compatible wire format. The
//! command layer depends on the `CompletionModel` trait so tests can
//! substitute scripted models for the live endpoint.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Configuration for the Groq chat-completion client
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the OpenAI-compatible API
  pub base_url: String,
  /// Model identifier sent with every request
  pub model: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      model: DEFAULT_MODEL.to_string(),
      timeout_secs: 30,
    }
  }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
  role: String,
  content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
  model: String,
  messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
  message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
  content: String,
}

/// One-shot completion seam: send a system + user message pair, get the
/// assistant text back. No retry, single attempt per call.
#[async_trait]
pub trait CompletionModel: Send + Sync {
  async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// HTTP client for the Groq chat-completions endpoint
pub struct GroqClient {
  client: Client,
  config: ClientConfig,
  api_key: String,
}

impl GroqClient {
  /// Create a client with default configuration
  pub fn new(api_key: String) -> Self {
    Self::with_config(api_key, ClientConfig::default())
  }

  /// Create a client with custom configuration
  pub fn with_config(api_key: String, config: ClientConfig) -> Self {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .expect("Failed to create HTTP client");

    Self { client, config, api_key }
  }

  /// Build the configured client from process environment.
  /// A missing `GROQ_API_KEY` is not rejected here; the first request
  /// fails with an authentication error through the normal error path.
  pub fn from_env() -> Self {
    let api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();

    let base_url =
      std::env::var("CROPSIGHT_GROQ_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let model = std::env::var("CROPSIGHT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let timeout_secs = std::env::var("CROPSIGHT_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .unwrap_or(30);

    Self::with_config(api_key, ClientConfig { base_url, model, timeout_secs })
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }
}

#[async_trait]
impl CompletionModel for GroqClient {
  async fn complete(&self, system: &str, user: &str) -> Result<String> {
    let request = ChatRequest {
      model: self.config.model.clone(),
      messages: vec![
        ChatMessage { role: "system".to_string(), content: system.to_string() },
        ChatMessage { role: "user".to_string(), content: user.to_string() },
      ],
    };

    let url = format!("{}/chat/completions", self.config.base_url);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", self.api_key))?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let response = self
      .client
      .post(&url)
      .headers(headers)
      .json(&request)
      .send()
      .await
      .map_err(|e| anyhow!("Chat request failed: {e}"))?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();

      // Groq wraps failures in {"error":{"message":...}}; fall back to
      // the raw body for anything else (proxies, plain-text errors)
      let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(body);

      return Err(anyhow!("Groq API returned {status}: {detail}"));
    }

    let completion: ChatResponse =
      response.json().await.context("Failed to parse Groq response")?;

    let choice = completion
      .choices
      .into_iter()
      .next()
      .ok_or_else(|| anyhow!("Groq response contained no choices"))?;

    Ok(choice.message.content)
  }
}
