//! Recording adapters that capture interactions to cassettes.

pub mod image_generator;
pub mod prompt_translator;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::format::RecordedFailure;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::GenError;

/// Record a port call outcome using the Ok/Err JSON convention.
///
/// API errors are stored with their HTTP status so replay reconstructs
/// the same diagnostic.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, GenError>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");

    let output_json = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).expect("failed to serialize Ok value");
            serde_json::json!({ "Ok": inner })
        }
        Err(e) => {
            let failure = serde_json::to_value(RecordedFailure::from_error(e))
                .expect("failed to serialize Err value");
            serde_json::json!({ "Err": failure })
        }
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
