//! Record/replay infrastructure for deterministic testing.
//!
//! A cassette captures every port interaction of one run so that the full
//! pipeline can be exercised later without network access or credentials.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
