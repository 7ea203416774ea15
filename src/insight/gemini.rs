//! Insight client for the Gemini `generateContent` REST endpoint.
//!
//! The request asks for a JSON response matching a two-field schema
//! (`explanation`, `verse`); the model's text part is then parsed as that
//! JSON. Any transport, status or parse failure is logged and turned into
//! [`Insight::fallback`].

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use super::{Insight, InsightService};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variables checked for an API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Why an insight request failed. Never leaves this module's public
/// `InsightService` impl; exposed for [`GeminiClient::try_request`].
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("failed: {status}: {body}")]
    FailedWithBody {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response has no text part")]
    EmptyResponse,
    #[error("malformed insight JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Client configuration.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key; requests are skipped (fallback returned) when absent.
    pub api_key: Option<String>,

    /// Model name as used in the endpoint path.
    pub model: String,

    /// Scheme and host, without trailing slash.
    pub base_url: String,

    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(20),
        }
    }
}

impl GeminiConfig {
    /// Defaults with the API key taken from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Prompt sent for a concept/context pair.
#[must_use]
pub fn prompt(concept: &str, context: &str) -> String {
    format!(
        "Explique brevemente a conexão teológica entre o conceito \"{concept}\" e o contexto \"{context}\". \
         Forneça também um versículo bíblico relevante."
    )
}

/// Full request body for `generateContent`.
#[must_use]
pub fn request_body(concept: &str, context: &str) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt(concept, context) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "explanation": { "type": "STRING", "description": "Breve explicação teológica." },
                    "verse": { "type": "STRING", "description": "Referência e texto de um versículo bíblico." }
                },
                "required": ["explanation", "verse"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct InsightFields {
    explanation: Option<String>,
    verse: Option<String>,
}

/// Extract the insight from a raw `generateContent` response body.
pub fn parse_response(body: &str) -> Result<Insight, InsightError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .ok_or(InsightError::EmptyResponse)?;

    let fields: InsightFields = if text.trim().is_empty() {
        InsightFields::default()
    } else {
        serde_json::from_str(&text)?
    };
    Ok(Insight::from_parts(fields.explanation, fields.verse))
}

/// HTTP insight client.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, InsightError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Perform the request, surfacing the failure reason.
    pub async fn try_request(&self, concept: &str, context: &str) -> Result<Insight, InsightError> {
        let key = self.config.api_key.as_deref().ok_or(InsightError::MissingApiKey)?;

        debug!(concept, context, model = %self.config.model, "requesting insight");
        let resp = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", key)
            .json(&request_body(concept, context))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(InsightError::FailedWithBody { status, body });
        }
        parse_response(&body)
    }
}

impl InsightService for GeminiClient {
    async fn request_insight(&self, concept: &str, context: &str) -> Insight {
        match self.try_request(concept, context).await {
            Ok(insight) => insight,
            Err(err) => {
                warn!(concept, context, %err, "insight unavailable, using fallback");
                Insight::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::{MISSING_EXPLANATION, MISSING_VERSE};

    fn wrap(text: &str) -> String {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }).to_string()
    }

    #[test]
    fn test_prompt_and_body() {
        let body = request_body("Graça", "Cruz");
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"Graça\""));
        assert!(text.contains("\"Cruz\""));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["required"][1], "verse");
    }

    #[test]
    fn test_parse_response() {
        let body = wrap(r#"{"explanation":"Cristo na cruz.","verse":"Rm 5:8"}"#);
        assert_eq!(parse_response(&body).unwrap(), Insight::new("Cristo na cruz.", "Rm 5:8"));
    }

    #[test]
    fn test_parse_response_missing_fields() {
        let insight = parse_response(&wrap(r#"{"verse":"Sl 23:1"}"#)).unwrap();
        assert_eq!(insight.explanation, MISSING_EXPLANATION);

        let insight = parse_response(&wrap("")).unwrap();
        assert_eq!(insight, Insight::new(MISSING_EXPLANATION, MISSING_VERSE));
    }

    #[test]
    fn test_parse_response_errors() {
        assert!(matches!(parse_response("nope"), Err(InsightError::Malformed(_))));
        assert!(matches!(parse_response(r#"{"candidates":[]}"#), Err(InsightError::EmptyResponse)));
        assert!(matches!(parse_response(&wrap("not json")), Err(InsightError::Malformed(_))));
    }

    #[test]
    fn test_config() {
        let config = GeminiConfig::default()
            .with_base_url("http://localhost:9000/")
            .with_model("m");
        assert_eq!(config.endpoint(), "http://localhost:9000/v1beta/models/m:generateContent");
        assert!(config.api_key.is_none());
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let client = GeminiClient::new(GeminiConfig::default()).unwrap();
        assert!(matches!(client.try_request("a", "b").await, Err(InsightError::MissingApiKey)));
        assert_eq!(client.request_insight("a", "b").await, Insight::fallback());
    }

    #[tokio::test]
    async fn test_unreachable_host_falls_back() {
        let config = GeminiConfig::default()
            .with_api_key("test")
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(client.request_insight("Paz", "Mar").await, Insight::fallback());
    }
}
