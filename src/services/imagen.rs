//! Imagen image API client.
//!
//! Wraps the `predict` REST endpoint. One prompt in, at most one generated
//! image out; an empty prediction list is a hard error.

use crate::models::config::ImagenConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const OUTPUT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    output_mime_type: String,
    aspect_ratio: String,
}

/// `predict` request payload.
#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

/// A generated image as returned by the provider.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes_base64: String,
}

impl GeneratedImage {
    /// Render the image as a self-contained data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.bytes_base64)
    }
}

/// Imagen image API client.
pub struct ImagenClient {
    config: ImagenConfig,
    api_key: String,
    client: reqwest::Client,
}

impl ImagenClient {
    /// Create a new client. Fails when the API key is empty.
    pub fn new(config: ImagenConfig, api_key: &str, timeout_secs: u64) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::ApiKeyMissing);
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            config,
            api_key: api_key.trim().to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:predict?key={}",
            API_BASE,
            self.config.model,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Generate one image for the prompt.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let request = PredictRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Parameters {
                sample_count: 1,
                output_mime_type: OUTPUT_MIME_TYPE.to_string(),
                aspect_ratio: self.config.aspect_ratio.clone(),
            },
        };

        let resp = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Provider(format!("{}: {}", status, body)));
        }

        let parsed: PredictResponse = resp.json().await?;
        let prediction = parsed
            .predictions
            .into_iter()
            .find(|p| p.bytes_base64_encoded.is_some())
            .ok_or_else(|| Error::GenerationFailed("no images returned".to_string()))?;

        Ok(GeneratedImage {
            mime_type: prediction
                .mime_type
                .unwrap_or_else(|| OUTPUT_MIME_TYPE.to_string()),
            bytes_base64: prediction.bytes_base64_encoded.unwrap_or_default(),
        })
    }
}
