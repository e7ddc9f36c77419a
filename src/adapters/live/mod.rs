//! Live adapters that call the real Workers AI endpoints.

pub mod workers_ai;
