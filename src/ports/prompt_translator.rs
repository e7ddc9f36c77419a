//! Prompt translator port for the text-generation API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// A request to translate and enrich a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// The raw prompt text as the user typed it.
    pub text: String,
}

/// Boxed future type returned by [`PromptTranslator::translate`].
pub type TranslateFuture<'a> = Pin<Box<dyn Future<Output = Result<String, GenError>> + Send + 'a>>;

/// Turns a non-English prompt into an enriched English one via an external API.
///
/// Callers treat every error as non-fatal; see `normalize::normalize_prompt`.
pub trait PromptTranslator: Send + Sync {
    /// Translate the given prompt text, returning the model's raw reply.
    fn translate(&self, request: &TranslationRequest) -> TranslateFuture<'_>;
}
