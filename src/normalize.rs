//! Prompt normalization: CJK detection and translate-with-fallback.

use log::{info, warn};

use crate::ports::{PromptTranslator, TranslationRequest};

/// Whether the text contains CJK ideographs in U+4E00..=U+9FA5, the range
/// the translation step is keyed on.
#[must_use]
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| matches!(c, '\u{4e00}'..='\u{9fa5}'))
}

/// Translate and enrich a prompt when it contains Chinese characters.
///
/// Prompts without CJK characters pass through untouched with zero network
/// calls. When translation is attempted, any failure (transport error,
/// API-reported failure, empty reply) falls back to the original prompt;
/// this step never fails the run.
pub async fn normalize_prompt(translator: &dyn PromptTranslator, prompt: &str) -> String {
    if !contains_cjk(prompt) {
        return prompt.to_string();
    }

    info!("detected Chinese characters, enhancing prompt via text model");

    let request = TranslationRequest { text: prompt.to_string() };
    match translator.translate(&request).await {
        Ok(reply) => {
            let enhanced = reply.trim();
            if enhanced.is_empty() {
                warn!("translation returned an empty reply, keeping original prompt");
                prompt.to_string()
            } else {
                info!("enhanced prompt: {enhanced:?}");
                enhanced.to_string()
            }
        }
        Err(e) => {
            warn!("translation failed, keeping original prompt: {e}");
            prompt.to_string()
        }
    }
}
