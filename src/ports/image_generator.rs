//! Image generator port for the text-to-image API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// A request to generate one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    /// The text prompt describing the desired image. This is the sole
    /// payload field the upstream API receives.
    pub prompt: String,
}

/// The binary image returned by the API, forwarded to disk untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Raw image bytes as delivered by the endpoint.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Boxed future type returned by [`ImageGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ImagePayload, GenError>> + Send + 'a>>;

/// Generates an image from a text prompt via an external API.
pub trait ImageGenerator: Send + Sync {
    /// Generate an image for the given request.
    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as base64 string.
    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    /// Deserialize base64 string to bytes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
