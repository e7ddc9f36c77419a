//! Live adapter for the Cloudflare Workers AI REST API.
//!
//! One client implements both ports: the text model behind
//! [`PromptTranslator`] and the image model behind [`ImageGenerator`].
//! Both are reached through the same `accounts/{id}/ai/run/{model}` route.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::HttpConfig;
use crate::error::GenError;
use crate::ports::image_generator::{GenerateFuture, ImageGenerator, ImagePayload, ImageRequest};
use crate::ports::prompt_translator::{PromptTranslator, TranslateFuture, TranslationRequest};

const API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Fixed system instruction for the translation step: translate the meaning,
/// enrich with visual detail, emit only the final prompt string.
const ENHANCE_INSTRUCTION: &str = "\
You are an expert AI art prompt generator. Your task is to translate Chinese \
descriptions into high-quality, detailed English prompts for Stable Diffusion XL.\n\
\n\
Rules:\n\
1. Translate the core meaning accurately.\n\
2. Enhance the prompt with visual details (lighting, artistic style, composition, \
texture) to make it suitable for high-quality image generation.\n\
3. Output ONLY the final English prompt string. Do not include explanations, \
introductions, or quotes.";

/// Live Workers AI client serving both pipeline steps.
#[derive(Clone)]
pub struct WorkersAiClient {
    client: Client,
    account_id: String,
    api_token: String,
    text_model: String,
    image_model: String,
}

impl WorkersAiClient {
    /// Create a client with explicit request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        account_id: String,
        api_token: String,
        text_model: String,
        image_model: String,
        http: &HttpConfig,
    ) -> Result<Self, GenError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
            .build()?;
        Ok(Self { client, account_id, api_token, text_model, image_model })
    }

    fn run_url(&self, model: &str) -> String {
        format!("{API_BASE}/accounts/{}/ai/run/{model}", self.account_id)
    }
}

impl PromptTranslator for WorkersAiClient {
    fn translate(&self, request: &TranslationRequest) -> TranslateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let url = self.run_url(&self.text_model);
            let body = serde_json::json!({
                "messages": [
                    {"role": "system", "content": ENHANCE_INSTRUCTION},
                    {"role": "user", "content": request.text},
                ]
            });

            debug!("translating prompt via {}", self.text_model);
            let response =
                self.client.post(&url).bearer_auth(&self.api_token).json(&body).send().await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(api_error(status, &response_text));
            }

            let envelope: RunEnvelope =
                serde_json::from_str(&response_text).map_err(|e| GenError::Api {
                    status: status.as_u16(),
                    message: format!("failed to parse response: {e}"),
                })?;

            if !envelope.success {
                let detail = join_errors(&envelope.errors);
                return Err(GenError::Api {
                    status: status.as_u16(),
                    message: format!("endpoint reported failure: {detail}"),
                });
            }

            envelope.result.map(|r| r.response).ok_or_else(|| GenError::Api {
                status: status.as_u16(),
                message: "missing result.response in reply".to_string(),
            })
        })
    }
}

impl ImageGenerator for WorkersAiClient {
    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let url = self.run_url(&self.image_model);
            let body = serde_json::json!({ "prompt": request.prompt });

            debug!("requesting image via {}", self.image_model);
            let response =
                self.client.post(&url).bearer_auth(&self.api_token).json(&body).send().await?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.unwrap_or_default();
                return Err(api_error(status, &body_text));
            }

            let data = response.bytes().await?.to_vec();
            debug!("received image payload of {} bytes", data.len());
            Ok(ImagePayload { data })
        })
    }
}

/// Build an API error carrying the status code, its canonical reason, and a
/// body excerpt.
fn api_error(status: reqwest::StatusCode, body: &str) -> GenError {
    GenError::Api {
        status: status.as_u16(),
        message: format!(
            "{} - {}",
            status.canonical_reason().unwrap_or("unknown status"),
            excerpt(body)
        ),
    }
}

/// Truncate an error body to 500 bytes, respecting UTF-8 boundaries.
fn excerpt(text: &str) -> String {
    const MAX: usize = 500;
    if text.len() <= MAX {
        return text.to_string();
    }
    let mut end = MAX;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

fn join_errors(errors: &[ApiMessage]) -> String {
    if errors.is_empty() {
        return "unspecified error".to_string();
    }
    errors
        .iter()
        .map(|e| match e.code {
            Some(code) => format!("code {code}: {}", e.message),
            None => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

// --- Workers AI response envelope types ---

#[derive(Deserialize)]
struct RunEnvelope {
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    result: Option<RunResult>,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

#[derive(Deserialize)]
struct RunResult {
    response: String,
}
