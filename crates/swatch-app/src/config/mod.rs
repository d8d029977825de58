//! Configuration file parsing for swatch
//!
//! Supports:
//! - `<config dir>/swatch/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, open_storage};
pub use types::*;
