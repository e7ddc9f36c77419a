//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_generator;
pub mod prompt_translator;

use std::sync::{Arc, Mutex};

use crate::cassette::format::RecordedFailure;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::GenError;

/// Retrieve the next recorded output for a given port and method, checking
/// the live request against the recorded one.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the port/method, or
/// if `live_input` differs from the recorded input.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
    live_input: &serde_json::Value,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method, live_input).output.clone()
}

/// Deserialize a replayed output back into a port `Result`.
///
/// Accepts `{"Err": {"status": ..., "message": ...}}` as written by the
/// recorder, plus a bare `{"Err": "text"}` form for hand-written fixtures.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, GenError> {
    if let Some(err_val) = output.get("Err") {
        let failure: RecordedFailure = serde_json::from_value(err_val.clone())
            .unwrap_or_else(|_| RecordedFailure {
                status: 0,
                message: err_val.as_str().unwrap_or("replayed failure").to_string(),
            });
        return Err(failure.into_error());
    }
    if let Some(ok_val) = output.get("Ok") {
        return serde_json::from_value(ok_val.clone())
            .map_err(|e| GenError::Config(format!("Malformed cassette Ok value: {e}")));
    }
    Err(GenError::Config("Malformed cassette output: expected an Ok or Err key".to_string()))
}
