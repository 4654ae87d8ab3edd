//! Configuration file parsing for rickdex
//!
//! Supports:
//! - `~/.config/rickdex/config.toml` - Global settings
//! - an explicit file passed with `--config`

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
