//! Gemini `generateContent` client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::{AppError, GeneratorConfig};
use crate::ports::{SuggestionGenerator, SuggestionRequest};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const API_KEY_ENV: &str = "API_KEY";
const TARGET: &str = "suggestion generator";

/// HTTP client asking Gemini for new catalog values.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: Option<String>,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a client. Without a key every request fails and callers take
    /// their fallback path.
    pub fn new(api_key: Option<String>, config: &GeneratorConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let raw = format!(
            "{}/{}:generateContent",
            config.api_url.as_str().trim_end_matches('/'),
            config.model
        );
        let endpoint = Url::parse(&raw).map_err(|e| {
            AppError::Configuration(format!("Invalid generator URL '{}': {}", raw, e))
        })?;

        Ok(Self { api_key, endpoint, client })
    }

    /// Create using the `API_KEY` environment variable.
    pub fn from_env(config: &GeneratorConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            debug!("{} environment variable not set; suggestion requests will fail", API_KEY_ENV);
        }
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn instruction(request: SuggestionRequest) -> String {
    format!(
        "You are an AI assistant for creative art generation. Generate {count} new, unique, and imaginative values for the art prompt category: '{catalog}'. The values should be concise phrases and highly creative. Return the result as a JSON array of strings. For example, for the category 'Lighting', you might return: [\"Eldritch glow\", \"Subsurface scattering\", \"Anamorphic lens flare\", \"Bioluminescent mist\", \"Golden hour haze\"]",
        count = request.count,
        catalog = request.catalog,
    )
}

impl SuggestionGenerator for HttpGeminiClient {
    fn generate(&self, request: SuggestionRequest) -> Result<String, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        let body = ApiRequest {
            contents: vec![Content { parts: vec![Part { text: Some(instruction(request)) }] }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: serde_json::json!({
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }),
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| AppError::transport(TARGET, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::transport(
                TARGET,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let api_response: ApiResponse =
            response.json().map_err(|e| AppError::malformed(TARGET, e))?;

        api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| AppError::malformed(TARGET, "no candidate text in response"))
    }
}
