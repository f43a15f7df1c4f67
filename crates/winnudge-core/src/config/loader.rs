use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::{CONFIG_DIR_ENV, Config, Keybinding, KeybindingsFile, keybinding};
use crate::{Error, Result};

/// Returns the config directory.
///
/// `$WINNUDGE_CONFIG_DIR` when set, otherwise `~/.config/winnudge/`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(".config").join("winnudge"))
        .ok_or(Error::NoConfigDir)
}

/// Returns the config file path: `<config dir>/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the keybindings file path: `<config dir>/keybindings.toml`.
pub fn keybindings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("keybindings.toml"))
}

/// Tries to load and parse `config.toml`, clamping values afterwards.
pub fn try_load(path: &Path) -> Result<Config> {
    let mut config: Config = read_toml(path)?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are logged.
pub fn load() -> Config {
    load_or_default(config_path().and_then(|p| try_load(&p)), Config::default)
}

/// Tries to load and parse a keybindings file.
pub fn try_load_keybindings(path: &Path) -> Result<Vec<Keybinding>> {
    let file: KeybindingsFile = read_toml(path)?;
    Ok(file.keybinding)
}

/// Loads keybindings from `<config dir>/keybindings.toml`.
///
/// Falls back to the built-in defaults if the file is missing or invalid.
pub fn load_keybindings() -> Vec<Keybinding> {
    load_or_default(
        keybindings_path().and_then(|p| try_load_keybindings(&p)),
        keybinding::defaults,
    )
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Unwraps a load result, falling back to defaults.
///
/// A missing file is the normal case and stays quiet; anything else is
/// logged as a warning.
fn load_or_default<T>(result: Result<T>, default: impl Fn() -> T) -> T {
    match result {
        Ok(val) => val,
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => default(),
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            default()
        }
    }
}
