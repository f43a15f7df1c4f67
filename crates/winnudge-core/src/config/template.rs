use super::keybinding::{self, Keybinding};

/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `winnudge init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# winnudge configuration
# Location: ~/.config/winnudge/config.toml

[overlay]
# How long the "Always on top" message stays visible, in milliseconds.
duration_ms = 2000
# Overlay colors as #RRGGBB.
background = "#FFFF00"
foreground = "#000000"

[logging]
# Write logs to ~/.config/winnudge/logs/winnudge.log instead of stderr.
enabled = false
# Minimum log level: "trace", "debug", "info", "warn", or "error".
# RUST_LOG overrides this when set.
level = "info"
"##
    .to_string()
}

/// Generates the default `keybindings.toml` contents with explanatory comments.
pub fn generate_keybindings() -> String {
    let mut content = String::from(
        r##"# winnudge keybindings
# Location: ~/.config/winnudge/keybindings.toml
#
# Actions: move-up, move-down, move-left, move-right,
#          grow-up, grow-down, grow-left, grow-right,
#          opacity-up, opacity-down, pin-on-top, unpin-on-top, next-monitor
# Modifiers: alt, shift, ctrl, win
# Keys: A-Z, 0-9, F1-F12, Up, Down, Left, Right, Enter, Space, Tab, ...
#
# The move step (pixels per press) is set from the control panel
# (`winnudge panel`) or with `winnudge step set <N>`.
"##,
    );
    for binding in keybinding::defaults() {
        content.push('\n');
        content.push_str(&entry(&binding));
    }
    content
}

fn entry(binding: &Keybinding) -> String {
    let modifiers: Vec<String> = binding
        .modifiers
        .iter()
        .map(|m| format!("\"{}\"", format!("{m:?}").to_ascii_lowercase()))
        .collect();
    format!(
        "[[keybinding]]\naction = \"{}\"\nkey = \"{}\"\nmodifiers = [{}]\n",
        binding.action,
        binding.key,
        modifiers.join(", ")
    )
}
