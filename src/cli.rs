//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::error::GenError;

/// AI image generation CLI for Cloudflare Workers AI.
///
/// Chinese prompts are translated and enriched before generation.
#[derive(Parser, Debug)]
#[command(name = "danqing", version, about)]
pub struct Cli {
    /// Text prompt describing the desired image.
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// File path the generated image is written to.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output (debug-level logging).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the required prompt/output pair.
    ///
    /// Both flags are declared optional so that a missing one is reported
    /// as a usage error with exit code 1 instead of clap's exit code 2.
    ///
    /// # Errors
    ///
    /// Returns a usage error if either flag is missing or the prompt is
    /// empty.
    pub fn resolve(&self) -> Result<(String, PathBuf), GenError> {
        let (Some(prompt), Some(output)) = (self.prompt.as_deref(), self.output.as_deref()) else {
            return Err(GenError::Usage(
                "usage: danqing --prompt \"<text>\" --output \"<path>\"".to_string(),
            ));
        };

        if prompt.trim().is_empty() {
            return Err(GenError::Usage("prompt must not be empty".to_string()));
        }

        Ok((prompt.to_string(), output.to_path_buf()))
    }
}
