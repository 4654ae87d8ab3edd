//! Settings loading from `config.toml`

use std::path::{Path, PathBuf};

use rickdex_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "rickdex";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# rickdex configuration

[api]
base_url = "https://rickandmortyapi.com/api"

[ui]
show_image_url = true   # Show avatar URLs in the table and on the profile screen
"#;

/// `~/.config/rickdex/config.toml` (platform equivalent), if a config dir exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the explicit path, or the default location.
///
/// Never fails: a missing or invalid file yields defaults.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    match explicit {
        Some(path) => load_settings_from(path),
        None => match default_config_path() {
            Some(path) => load_settings_from(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Settings::default()
            }
        },
    }
}

/// Load settings from a specific file
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file unless one already exists.
///
/// Returns the path of the config file.
pub fn init_config_file(config_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    if !config_path.exists() {
        std::fs::write(config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path.to_path_buf())
}
