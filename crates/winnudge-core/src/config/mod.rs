pub mod keybinding;
mod loader;
pub mod template;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::settings::Color;

pub use keybinding::{Keybinding, Modifier};
pub use loader::{
    config_dir, config_path, keybindings_path, load, load_keybindings, try_load,
    try_load_keybindings,
};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "WINNUDGE_CONFIG_DIR";

/// Top-level configuration for winnudge.
///
/// Loaded from `~/.config/winnudge/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log output settings.
    pub logging: LogConfig,
    /// Transient overlay appearance.
    pub overlay: OverlayConfig,
}

/// Appearance of the overlay shown after pin/unpin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long the overlay stays on screen, in milliseconds.
    pub duration_ms: u64,
    /// Hex background color.
    pub background: String,
    /// Hex text color.
    pub foreground: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            background: "#FFFF00".into(),
            foreground: "#000000".into(),
        }
    }
}

impl OverlayConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.background).unwrap_or(Color {
            r: 0xFF,
            g: 0xFF,
            b: 0x00,
        })
    }

    pub fn foreground_color(&self) -> Color {
        Color::from_hex(&self.foreground).unwrap_or(Color { r: 0, g: 0, b: 0 })
    }
}

impl Config {
    /// Clamps values to safe ranges and replaces unparsable colors.
    pub fn validate(&mut self) {
        self.overlay.duration_ms = self.overlay.duration_ms.clamp(100, 60_000);
        let defaults = OverlayConfig::default();
        if Color::from_hex(&self.overlay.background).is_none() {
            self.overlay.background = defaults.background;
        }
        if Color::from_hex(&self.overlay.foreground).is_none() {
            self.overlay.foreground = defaults.foreground;
        }
    }
}

/// Wrapper for deserializing the keybindings file.
///
/// The file contains a top-level `[[keybinding]]` array of tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct KeybindingsFile {
    #[serde(default = "keybinding::defaults")]
    keybinding: Vec<Keybinding>,
}
