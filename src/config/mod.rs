//! Configuration — exporter settings with defaults and an optional TOML override.

pub mod settings;

pub use settings::{home_dir, Settings};
