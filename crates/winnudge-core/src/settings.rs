//! Control panel display settings (`settings.json`).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config;
use crate::{Error, Result};

const SETTINGS_FILE_NAME: &str = "settings.json";

/// RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parses a hex color string like "#00FF00" or "00ff00".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Formats as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Theme settings for the control panel.
///
/// Keys missing from the file take their defaults. Keys this version does
/// not know about are kept and written back on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub theme: String,
    pub background_color: String,
    pub font_color: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Built-in themes as `(name, background, font)`.
pub const PRESETS: [(&str, &str, &str); 2] = [
    ("dark", "#000000", "#00FF00"),
    ("light", "#FFFFFF", "#000000"),
];

impl Default for DisplaySettings {
    fn default() -> Self {
        let (theme, background, font) = PRESETS[0];
        Self {
            theme: theme.into(),
            background_color: background.into(),
            font_color: font.into(),
            extra: serde_json::Map::new(),
        }
    }
}

impl DisplaySettings {
    /// Switches to a built-in theme, setting its name and both colors.
    ///
    /// Matching ignores case. Returns `false` and changes nothing when
    /// `name` is not a preset.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        let Some((theme, background, font)) = PRESETS
            .iter()
            .find(|(preset, _, _)| preset.eq_ignore_ascii_case(name.trim()))
        else {
            return false;
        };
        self.theme = (*theme).to_string();
        self.background_color = (*background).to_string();
        self.font_color = (*font).to_string();
        true
    }

    /// Applies the preset called `name`, or just renames the theme when
    /// there is none.
    pub fn set_theme(&mut self, name: &str) {
        if !self.apply_preset(name) {
            self.theme = name.trim().to_string();
        }
    }

    /// Sets the background color after checking it is `#RRGGBB`.
    pub fn set_background(&mut self, hex: &str) -> Result<()> {
        self.background_color = normalize_color(hex)?;
        Ok(())
    }

    /// Sets the font color after checking it is `#RRGGBB`.
    pub fn set_font(&mut self, hex: &str) -> Result<()> {
        self.font_color = normalize_color(hex)?;
        Ok(())
    }
}

fn normalize_color(hex: &str) -> Result<String> {
    Color::from_hex(hex)
        .map(Color::to_hex)
        .ok_or_else(|| Error::InvalidColor(hex.to_string()))
}

/// Reads and writes `settings.json`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config dir>/settings.json`.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(config::config_dir()?.join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the settings file. A missing file yields the defaults.
    pub fn try_load(&self) -> Result<DisplaySettings> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DisplaySettings::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads settings, falling back to defaults on any error.
    pub fn load(&self) -> DisplaySettings {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), "{e}");
            DisplaySettings::default()
        })
    }

    pub fn save(&self, settings: &DisplaySettings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join(SETTINGS_FILE_NAME))
    }

    #[test]
    fn parse_hex_color() {
        // Assert
        assert_eq!(
            Color::from_hex("#00FF00"),
            Some(Color {
                r: 0x00,
                g: 0xFF,
                b: 0x00
            })
        );
        assert_eq!(Color::from_hex("1e1e2e").map(Color::to_hex).as_deref(), Some("#1E1E2E"));
        assert_eq!(Color::from_hex("bad"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();

        // Act
        let settings = store_in(&dir).load();

        // Assert
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.background_color, "#000000");
        assert_eq!(settings.font_color, "#00FF00");
    }

    #[test]
    fn missing_keys_are_filled_from_defaults() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r##"{"background_color": "#222222"}"##).unwrap();

        // Act
        let settings = store.load();

        // Assert
        assert_eq!(settings.background_color, "#222222");
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.font_color, "#00FF00");
    }

    #[test]
    fn unknown_keys_survive_a_save() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"theme": "light", "window_size": "300x500"}"#).unwrap();

        // Act
        let mut settings = store.load();
        settings.set_font("#ffffff").unwrap();
        store.save(&settings).unwrap();
        let reloaded = store.load();

        // Assert
        assert_eq!(reloaded.theme, "light");
        assert_eq!(reloaded.font_color, "#FFFFFF");
        assert_eq!(reloaded.extra["window_size"], "300x500");
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        // Act / Assert
        assert!(store.try_load().is_err());
        assert_eq!(store.load(), DisplaySettings::default());
    }

    #[test]
    fn invalid_color_is_rejected() {
        // Arrange
        let mut settings = DisplaySettings::default();

        // Act
        let result = settings.set_background("blue");

        // Assert
        assert!(matches!(result, Err(Error::InvalidColor(_))));
        assert_eq!(settings.background_color, "#000000");
    }

    #[test]
    fn light_preset_sets_name_and_both_colors() {
        // Arrange
        let mut settings = DisplaySettings::default();

        // Act
        let applied = settings.apply_preset("Light");

        // Assert
        assert!(applied);
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.background_color, "#FFFFFF");
        assert_eq!(settings.font_color, "#000000");
    }

    #[test]
    fn dark_preset_restores_defaults() {
        // Arrange
        let mut settings = DisplaySettings::default();
        settings.apply_preset("light");

        // Act
        settings.apply_preset("dark");

        // Assert
        assert_eq!(settings, DisplaySettings::default());
    }

    #[test]
    fn unknown_preset_changes_nothing() {
        // Arrange
        let mut settings = DisplaySettings::default();

        // Act / Assert
        assert!(!settings.apply_preset("solarized"));
        assert_eq!(settings, DisplaySettings::default());
    }

    #[test]
    fn custom_theme_name_keeps_colors() {
        // Arrange
        let mut settings = DisplaySettings::default();
        settings.set_font("#FF8800").unwrap();

        // Act
        settings.set_theme("sunset");

        // Assert
        assert_eq!(settings.theme, "sunset");
        assert_eq!(settings.font_color, "#FF8800");
    }
}
