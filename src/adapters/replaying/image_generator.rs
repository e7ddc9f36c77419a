//! Replaying adapter for the `ImageGenerator` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::image_generator::{GenerateFuture, ImageGenerator, ImagePayload, ImageRequest};

/// Serves recorded image generation results from a cassette.
pub struct ReplayingImageGenerator {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageGenerator {
    /// Create a replaying generator backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ImageGenerator for ReplayingImageGenerator {
    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let live_input = serde_json::to_value(request).expect("failed to serialize replay input");
        let output = next_output(&self.replayer, "image_generator", "generate", &live_input);
        Box::pin(async move { replay_result::<ImagePayload>(output) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn replayer_with_generator_input(input: serde_json::Value) -> Arc<Mutex<CassetteReplayer>> {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "image_generator".into(),
                method: "generate".into(),
                input,
                output: json!({"Ok": {"data": "iVBORw=="}}),
            }],
        };
        Arc::new(Mutex::new(CassetteReplayer::new(&cassette)))
    }

    #[tokio::test]
    async fn serves_the_payload_recorded_for_the_request() {
        let generator = ReplayingImageGenerator::new(replayer_with_generator_input(json!({
            "prompt": "a red fox"
        })));

        let payload =
            generator.generate(&ImageRequest { prompt: "a red fox".into() }).await.unwrap();
        assert_eq!(payload.data, vec![0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    #[should_panic(expected = "input mismatch")]
    async fn rejects_a_request_that_was_never_recorded() {
        let generator = ReplayingImageGenerator::new(replayer_with_generator_input(json!({
            "prompt": "a red fox"
        })));

        let _ = generator.generate(&ImageRequest { prompt: "a blue fox".into() }).await;
    }
}
