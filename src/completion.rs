//! The completion-service boundary.
//!
//! The core treats text generation as an opaque function from prompt to
//! reply, expressed by [`CompletionService`]. [`ChatCompletionClient`] is
//! the concrete implementation speaking the OpenAI-compatible
//! chat-completions protocol (as served by Groq, among others).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default API base URL (Groq's OpenAI-compatible endpoint).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// An opaque text-generation service: prompt in, reply out.
///
/// Failures are surfaced as [`Error::Upstream`] and never retried here.
pub trait CompletionService {
    /// Generate a reply for `prompt`.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Generation parameters passed through to the remote service.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Nucleus-sampling top-p.
    pub top_p: f32,
    /// Stop sequences, if any.
    pub stop: Option<Vec<String>>,
}

impl CompletionParams {
    /// Create new params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the generation token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set nucleus-sampling top-p.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Set stop sequences.
    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 1.0,
            max_tokens: 1024,
            top_p: 1.0,
            stop: None,
        }
    }
}

/// Synchronous chat-completions client.
///
/// # Example
///
/// ```no_run
/// use askpdf::completion::{ChatCompletionClient, CompletionService};
///
/// let client = ChatCompletionClient::new("gsk_...");
/// let reply = client.complete("Say hello")?;
/// # Ok::<(), askpdf::Error>(())
/// ```
pub struct ChatCompletionClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    params: CompletionParams,
}

impl ChatCompletionClient {
    /// Create a client for the default endpoint with default parameters.
    ///
    /// The API key is held only for the lifetime of the client and sent
    /// as a bearer token; it is never persisted.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            params: CompletionParams::default(),
        }
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the generation parameters.
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.params.model = model.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
    stop: Option<&'a [String]>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionService for ChatCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.params.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
            top_p: self.params.top_p,
            stream: false,
            stop: self.params.stop.as_deref(),
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        log::debug!("requesting completion from {} ({})", url, request.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| Error::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Upstream(format!("status {}: {}", status, body)));
        }

        let parsed: ChatResponse = response.json().map_err(|e| Error::Upstream(e.to_string()))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Upstream("response contained no choices".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_defaults() {
        let params = CompletionParams::default();
        assert_eq!(params.model, DEFAULT_MODEL);
        assert_eq!(params.temperature, 1.0);
        assert_eq!(params.max_tokens, 1024);
        assert_eq!(params.top_p, 1.0);
        assert!(params.stop.is_none());
    }

    #[test]
    fn test_params_builder() {
        let params = CompletionParams::new()
            .with_model("llama3-8b-8192")
            .with_temperature(0.2)
            .with_max_tokens(256)
            .with_top_p(0.9)
            .with_stop(vec!["END".to_string()]);

        assert_eq!(params.model, "llama3-8b-8192");
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_tokens, 256);
        assert_eq!(params.stop, Some(vec!["END".to_string()]));
    }

    #[test]
    fn test_request_wire_format() {
        let request = ChatRequest {
            model: "llama3-70b-8192",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: 1.0,
            max_tokens: 1024,
            top_p: 1.0,
            stream: false,
            stop: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "llama3-70b-8192",
                "messages": [{"role": "user", "content": "hello"}],
                "temperature": 1.0,
                "max_tokens": 1024,
                "top_p": 1.0,
                "stream": false,
                "stop": null,
            })
        );
    }

    #[test]
    fn test_response_parsing() {
        let body = json!({
            "id": "chatcmpl-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  Hi there.  "}}
            ]
        });
        let parsed: ChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "  Hi there.  ");
    }

    #[test]
    fn test_client_builder() {
        let client = ChatCompletionClient::new("key")
            .with_base_url("http://localhost:8080/v1/")
            .with_model("test-model");
        assert_eq!(client.base_url, "http://localhost:8080/v1/");
        assert_eq!(client.params.model, "test-model");
    }
}
