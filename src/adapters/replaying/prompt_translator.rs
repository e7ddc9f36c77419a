//! Replaying adapter for the `PromptTranslator` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::prompt_translator::{PromptTranslator, TranslateFuture, TranslationRequest};

/// Serves recorded translation results from a cassette.
pub struct ReplayingPromptTranslator {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingPromptTranslator {
    /// Create a replaying translator backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl PromptTranslator for ReplayingPromptTranslator {
    fn translate(&self, request: &TranslationRequest) -> TranslateFuture<'_> {
        let live_input = serde_json::to_value(request).expect("failed to serialize replay input");
        let output = next_output(&self.replayer, "prompt_translator", "translate", &live_input);
        Box::pin(async move { replay_result::<String>(output) })
    }
}
