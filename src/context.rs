//! Service context that bundles all port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::workers_ai::WorkersAiClient;
use crate::adapters::recording::image_generator::RecordingImageGenerator;
use crate::adapters::recording::prompt_translator::RecordingPromptTranslator;
use crate::adapters::replaying::image_generator::ReplayingImageGenerator;
use crate::adapters::replaying::prompt_translator::ReplayingPromptTranslator;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::GenError;
use crate::model::{resolve_model, validate_model};
use crate::ports::{ImageGenerator, PromptTranslator};

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Prompt translator port.
    pub translator: Box<dyn PromptTranslator>,
    /// Image generator port.
    pub generator: Box<dyn ImageGenerator>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<std::path::PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context talking to the Workers AI API.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or a configured model
    /// id is malformed.
    pub fn live(config: &Config) -> Result<Self, GenError> {
        let account_id = config.account_id().ok_or_else(|| GenError::MissingCredential {
            what: "account id".into(),
            env_var: "DANQING_ACCOUNT_ID".into(),
        })?;
        let api_token = config.api_token().ok_or_else(|| GenError::MissingCredential {
            what: "API token".into(),
            env_var: "DANQING_API_TOKEN".into(),
        })?;

        let text_model = resolve_model(&config.models.text);
        validate_model(&text_model).map_err(GenError::Config)?;
        let image_model = resolve_model(&config.models.image);
        validate_model(&image_model).map_err(GenError::Config)?;

        let client =
            WorkersAiClient::new(account_id, api_token, text_model, image_model, &config.http)?;

        Ok(Self { translator: Box::new(client.clone()), generator: Box::new(client) })
    }

    /// Create a recording context that wraps the live adapters with a
    /// shared recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context cannot be initialized.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), GenError> {
        let live_ctx = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = std::path::PathBuf::from(".danqing/cassettes")
            .join(&timestamp)
            .join("session.cassette.yaml");

        let commit = get_commit_hash();
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-session"),
            &commit,
        )));

        let translator =
            RecordingPromptTranslator::new(live_ctx.translator, Arc::clone(&recorder));
        let generator = RecordingImageGenerator::new(live_ctx.generator, Arc::clone(&recorder));

        let ctx = Self { translator: Box::new(translator), generator: Box::new(generator) };
        let session = RecordingSession { recorder };

        Ok((ctx, session))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, GenError> {
        let replayer = load_cassette(path)
            .map_err(|e| GenError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        let translator = ReplayingPromptTranslator::new(Arc::clone(&replayer));
        let generator = ReplayingImageGenerator::new(replayer);
        Ok(Self { translator: Box::new(translator), generator: Box::new(generator) })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
