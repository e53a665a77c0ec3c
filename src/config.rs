//! Application config
//!
//! Read once at startup from JSON. Every field has a default, so a missing
//! file (or a file that only sets a couple of keys) is fine. The gallery
//! never writes this file back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Overrides the config file location
pub const CONFIG_ENV_VAR: &str = "COLLEGETIPS_GALLERY_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog JSON file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Directory that image and audio sources are resolved against
    pub asset_root: PathBuf,
    /// Audio cue played with the surprise popups
    pub audio_cue: String,
    /// Initial state of the sound toggle
    pub sound_enabled: bool,
    /// Draw a "Mascot" marker on mascot thumbnails (debug affordance)
    pub debug_show_mascot_markers: bool,
    /// Category key the gallery opens on ("team", "meme", ...); "all" when unset
    pub start_category: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            asset_root: PathBuf::from("public"),
            audio_cue: "/static/error.mp3".to_string(),
            sound_enabled: true,
            debug_show_mascot_markers: cfg!(debug_assertions),
            start_category: None,
        }
    }
}

/// Where the config file lives:
/// - `$COLLEGETIPS_GALLERY_CONFIG` if set
/// - Linux: ~/.config/collegetips-gallery/config.json
/// - macOS: ~/Library/Application Support/collegetips-gallery/config.json
/// - Windows: %APPDATA%\collegetips-gallery\config.json
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("collegetips-gallery");
    path.push("config.json");
    Some(path)
}

/// Load the config from its default location
pub fn load() -> Result<Config> {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            log::warn!("Could not determine a config directory, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load the config from `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(GalleryError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = serde_json::from_str(&json).map_err(|source| GalleryError::ConfigFormat {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("⚙️  Config loaded from {}", path.display());
    Ok(config)
}
