//! Gemini text API client.
//!
//! Thin request/response wrapper over the `generateContent` REST endpoint.
//! Structured operations attach a response schema so the model replies with
//! JSON conforming to the declared shape; decoding that JSON into typed
//! values happens one layer up, in the gateway.

use crate::models::config::GeminiConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 64,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(flatten)]
    params: GenerationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

/// `generateContent` request payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini text API client.
pub struct GeminiClient {
    config: GeminiConfig,
    params: GenerationParams,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new client. Fails when no API key is configured.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(Error::ApiKeyMissing);
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            config,
            params: GenerationParams::default(),
            client,
        })
    }

    fn api_key(&self) -> &str {
        // Checked non-empty in new().
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            API_BASE,
            self.config.model,
            method,
            urlencoding::encode(self.api_key().trim())
        )
    }

    /// Check that the API is reachable with the configured key.
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!(
            "{}/models?pageSize=1&key={}",
            API_BASE,
            urlencoding::encode(self.api_key().trim())
        );
        match self.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Generate free text from a prompt.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_schema(prompt, None).await
    }

    /// Generate JSON text conforming to the given response schema.
    pub async fn generate_json(&self, prompt: &str, schema: Value) -> Result<String> {
        self.generate_with_schema(prompt, Some(schema)).await
    }

    async fn generate_with_schema(&self, prompt: &str, schema: Option<Value>) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                params: self.params,
                response_mime_type: schema.as_ref().map(|_| "application/json".to_string()),
                response_schema: schema,
            },
        };

        let resp = self
            .client
            .post(self.endpoint("generateContent"))
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Provider(format!("{}: {}", status, body)));
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::InvalidResponse("generateContent".to_string()));
        }

        Ok(text.trim().to_string())
    }
}
