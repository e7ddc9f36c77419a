//! Recording adapter for the `PromptTranslator` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::prompt_translator::{PromptTranslator, TranslateFuture, TranslationRequest};

/// Records translation interactions while delegating to an inner
/// implementation.
pub struct RecordingPromptTranslator {
    inner: Box<dyn PromptTranslator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPromptTranslator {
    /// Creates a new recording translator wrapping the given implementation.
    pub fn new(inner: Box<dyn PromptTranslator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl PromptTranslator for RecordingPromptTranslator {
    fn translate(&self, request: &TranslationRequest) -> TranslateFuture<'_> {
        let request_clone = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.translate(&request_clone).await;
            record_result(&recorder, "prompt_translator", "translate", &request_clone, &result);
            result
        })
    }
}
