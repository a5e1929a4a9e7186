//! GeminiArtAgent - Direct REST API implementation of [`ArtQuery`].
//!
//! Calls the Gemini REST API directly; configuration is loaded from
//! secret.json. The response is constrained to the ArtInfo JSON schema via
//! `generationConfig`, so a successful call always yields a parseable
//! document.

use artlens_core::art_info::ArtInfo;
use artlens_core::capture::CapturedImage;
use artlens_core::error::QueryError;
use artlens_core::query::ArtQuery;
use artlens_core::secret::SecretService;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::classify::{ServiceFault, classify};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Instruction sent alongside every captured frame.
const INSTRUCTION: &str = "You are an art historian. Identify this painting and \
provide detailed information about it. If you cannot identify the painting, \
state that clearly in the description and offer your best guess if possible; \
in that case leave the other fields empty.";

/// Agent that maps a captured still frame to art information via the Gemini
/// HTTP API.
#[derive(Clone, Debug)]
pub struct GeminiArtAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiArtAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads configuration from the secret service.
    ///
    /// Model name defaults to `gemini-2.5-flash` if not specified.
    pub async fn try_from_secrets(service: &dyn SecretService) -> Result<Self, QueryError> {
        let secret_config = service.load_secrets().await.map_err(|err| {
            tracing::warn!("[ArtQuery] Failed to load secrets: {}", err);
            QueryError::other(format!("Failed to load secret configuration: {err}"))
        })?;

        let gemini_config = secret_config.gemini.ok_or(QueryError::InvalidApiKey)?;
        let model = gemini_config
            .model_name
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self::new(gemini_config.api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_body(&self, image: &CapturedImage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineDataPayload {
                            mime_type: image.mime_type.clone(),
                            data: image.data.clone(),
                        },
                    },
                    Part::Text {
                        text: INSTRUCTION.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: art_info_schema(),
            },
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, QueryError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| classify(&ServiceFault::from_transport(&err)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::warn!("[ArtQuery] Service answered {}: {}", status, body_text);
            return Err(classify(&ServiceFault::from_http(status, &body_text)));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            tracing::warn!("[ArtQuery] Unreadable response envelope: {}", err);
            QueryError::MalformedResponse
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ArtQuery for GeminiArtAgent {
    async fn query(&self, image: &CapturedImage) -> Result<ArtInfo, QueryError> {
        let request = self.request_body(image);
        let text = self.send_request(&request).await?;
        ArtInfo::from_json_text(&text)
    }
}

/// The ArtInfo response schema in Gemini's schema dialect.
fn art_info_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The formal title of the painting."
            },
            "artist": {
                "type": "STRING",
                "description": "The name of the painter."
            },
            "year": {
                "type": "STRING",
                "description": "The year or period the painting was created, e.g. \"1889\" or \"c. 1665\"."
            },
            "description": {
                "type": "STRING",
                "description": "A detailed account of the painting's subject and artistic style."
            },
            "historicalContext": {
                "type": "STRING",
                "description": "The era, culture and art movement the painter worked in."
            }
        },
        "required": ["title", "artist", "year", "description", "historicalContext"]
    })
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataPayload {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, QueryError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            tracing::warn!("[ArtQuery] No text in the response candidates");
            QueryError::MalformedResponse
        })
}
