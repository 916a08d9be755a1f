//! Gemini Provider - Google generateContent API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::llm::{
    GeminiConfig, GenerationError, GenerationOptions, GenerationResult, Generator,
};

/// Gemini provider
pub struct GeminiProvider {
    api_key: Option<String>,
    endpoint: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: &GeminiConfig) -> GenerationResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        Ok(Self {
            api_key: config.api_key().map(str::to_string),
            endpoint: config.endpoint.clone(),
            client,
        })
    }
}

/// API request structure
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: WireGenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// `generationConfig` as the API spells it
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl From<&GenerationOptions> for WireGenerationConfig {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            temperature: options.temperature,
            max_output_tokens: options.max_output_tokens,
            top_p: options.top_p,
            top_k: options.top_k,
        }
    }
}

/// API response structure
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> GenerationResult<String> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::Malformed("No candidates in response".to_string()))?;

        let text = candidate
            .content
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| GenerationError::Malformed("Candidate has no text part".to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

fn transport_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Network(e.to_string())
    }
}

#[async_trait]
impl Generator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        prompt: &str,
        options: Option<&GenerationOptions>,
    ) -> GenerationResult<String> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;

        let default_options = GenerationOptions::client_default();
        let options = options.unwrap_or(&default_options);

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: options.into(),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_chars = prompt.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        parsed.first_text()
    }
}
