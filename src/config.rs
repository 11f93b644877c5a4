//! User settings, stored as JSON.
//!
//! The settings file lives in the user's config directory:
//! - Linux: ~/.config/wallpaper-gallery/settings.json
//! - macOS: ~/Library/Application Support/wallpaper-gallery/settings.json
//! - Windows: %APPDATA%\wallpaper-gallery\settings.json
//!
//! Set `WALLPAPER_GALLERY_CONFIG_DIR` to use another directory (tests, portable installs).
//!
//! The Lexend font is not bundled. Download `Lexend.ttf` (SIL Open Font License)
//! from Google Fonts and copy it to the data directory:
//! - Linux: ~/.local/share/wallpaper-gallery/fonts/Lexend.ttf
//! - macOS: ~/Library/Application Support/wallpaper-gallery/fonts/Lexend.ttf
//! - Windows: %APPDATA%\wallpaper-gallery\fonts\Lexend.ttf
//!
//! or point `font_path` in `settings.json` at any copy. Without it the app
//! starts with iced's default face.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const APP_DIR: &str = "wallpaper-gallery";
const CONFIG_FILE: &str = "settings.json";
const CONFIG_DIR_ENV: &str = "WALLPAPER_GALLERY_CONFIG_DIR";

/// Name the UI font is registered under once loaded
pub const FONT_FAMILY: &str = "Lexend";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// TTF file for the UI font
    pub font_path: PathBuf,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// How long an acknowledgement toast stays on screen
    pub toast_seconds: u64,
    /// Per-request timeout for remote wallpaper images
    pub image_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_path: default_font_path(),
            log_level: "info".to_string(),
            toast_seconds: 3,
            image_timeout_seconds: 20,
        }
    }
}

fn default_font_path() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push(APP_DIR);
    path.push("fonts");
    path.push(format!("{FONT_FAMILY}.ttf"));
    path
}

/// Directory holding `settings.json`
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

pub fn settings_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Load settings from the default location.
///
/// Never fails: a missing file is seeded with defaults, an unreadable or invalid
/// one yields defaults plus the error so the caller can log it once logging is up.
pub fn load() -> (Config, Option<Error>) {
    let path = settings_path();
    if !path.exists() {
        let config = Config::default();
        let warning = save_to_path(&config, &path).err();
        return (config, warning);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

/// Load settings from an explicit path. A missing file is not an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
}

/// Write settings to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}
