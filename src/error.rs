//! Unified error type for danqing.

use thiserror::Error;

/// Errors that can occur while generating an image.
#[derive(Debug, Error)]
pub enum GenError {
    /// An API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Missing or invalid command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// A required Cloudflare credential is not configured.
    #[error("No {what} configured. Set {env_var} or add it to the config file.")]
    MissingCredential {
        /// What is missing (account id or API token).
        what: String,
        /// The environment variable name.
        env_var: String,
    },
}
