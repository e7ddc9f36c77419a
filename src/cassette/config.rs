//! Cassette mode selection and loading.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// How the service context sources its port implementations.
#[derive(Debug)]
pub enum CassetteMode {
    /// Call the real endpoints.
    Live,
    /// Call the real endpoints and record every interaction.
    Recording,
    /// Serve recorded interactions from the given cassette file.
    Replay(PathBuf),
}

/// Determine the cassette mode from the environment.
///
/// `DANQING_REPLAY=<path>` selects replay and takes precedence;
/// `DANQING_REC=true|1` selects recording; anything else is live.
#[must_use]
pub fn cassette_mode() -> CassetteMode {
    if let Ok(path) = std::env::var("DANQING_REPLAY") {
        return CassetteMode::Replay(PathBuf::from(path));
    }
    if std::env::var("DANQING_REC").is_ok_and(|v| v == "true" || v == "1") {
        CassetteMode::Recording
    } else {
        CassetteMode::Live
    }
}

/// Load a cassette file and create a replayer.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_cassette(path: &Path) -> Result<CassetteReplayer, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
    let cassette: Cassette = serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
    Ok(CassetteReplayer::new(&cassette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    // One test walks all three modes sequentially: the mode env vars are
    // process-wide, so splitting this up would race under parallel runs.
    #[test]
    fn mode_selection_precedence() {
        std::env::remove_var("DANQING_REPLAY");
        std::env::remove_var("DANQING_REC");
        assert!(matches!(cassette_mode(), CassetteMode::Live));

        std::env::set_var("DANQING_REC", "1");
        assert!(matches!(cassette_mode(), CassetteMode::Recording));

        std::env::set_var("DANQING_REC", "false");
        assert!(matches!(cassette_mode(), CassetteMode::Live));

        std::env::set_var("DANQING_REPLAY", "/tmp/session.cassette.yaml");
        std::env::set_var("DANQING_REC", "1");
        match cassette_mode() {
            CassetteMode::Replay(path) => {
                assert_eq!(path, PathBuf::from("/tmp/session.cassette.yaml"));
            }
            other => panic!("replay must win over recording, got {other:?}"),
        }

        std::env::remove_var("DANQING_REPLAY");
        std::env::remove_var("DANQING_REC");
    }

    #[test]
    fn load_valid_cassette() {
        let dir = std::env::temp_dir().join("danqing_cassette_load_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.cassette.yaml");

        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "image_generator".into(),
                method: "generate".into(),
                input: json!({"prompt": "a cat"}),
                output: json!({"Ok": {"data": "iVBORw=="}}),
            }],
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        std::fs::write(&path, yaml).unwrap();

        let mut replayer = load_cassette(&path).unwrap();
        let i =
            replayer.next_interaction("image_generator", "generate", &json!({"prompt": "a cat"}));
        assert_eq!(i.seq, 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_nonexistent_fails() {
        assert!(load_cassette(Path::new("/nonexistent/cassette.yaml")).is_err());
    }
}
