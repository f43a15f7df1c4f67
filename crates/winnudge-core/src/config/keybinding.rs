use serde::{Deserialize, Serialize};

use crate::{Action, Direction};

/// A user-configured keybinding that maps a key combination to an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybinding {
    /// The action to trigger.
    pub action: Action,
    /// Key name (e.g. "Up", "M", "F1").
    pub key: String,
    /// Modifier keys (e.g. ["ctrl", "shift"]).
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Win,
}

/// Returns the default keybindings.
///
/// Arrows: move by one step
/// Shift + arrows: grow the window toward that side
/// Ctrl + Up/Down: opacity up/down
/// Ctrl + Left/Right: unpin/pin always on top
/// Ctrl + Shift + M: move to the next monitor
pub fn defaults() -> Vec<Keybinding> {
    use Modifier::{Ctrl, Shift};

    let mut bindings = Vec::new();
    for dir in Direction::ALL {
        bindings.push(bind(Action::Move(dir), arrow(dir), &[]));
    }
    for dir in Direction::ALL {
        bindings.push(bind(Action::Grow(dir), arrow(dir), &[Shift]));
    }
    bindings.extend([
        bind(Action::IncreaseOpacity, "Up", &[Ctrl]),
        bind(Action::DecreaseOpacity, "Down", &[Ctrl]),
        bind(Action::UnpinOnTop, "Left", &[Ctrl]),
        bind(Action::PinOnTop, "Right", &[Ctrl]),
        bind(Action::NextMonitor, "M", &[Ctrl, Shift]),
    ]);
    bindings
}

/// Human-readable combination, e.g. `ctrl+shift+M`.
pub fn describe(binding: &Keybinding) -> String {
    let mut parts: Vec<String> = binding
        .modifiers
        .iter()
        .map(|m| format!("{m:?}").to_ascii_lowercase())
        .collect();
    parts.push(binding.key.clone());
    parts.join("+")
}

fn arrow(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "Up",
        Direction::Down => "Down",
        Direction::Left => "Left",
        Direction::Right => "Right",
    }
}

fn bind(action: Action, key: &str, modifiers: &[Modifier]) -> Keybinding {
    Keybinding {
        action,
        key: key.into(),
        modifiers: modifiers.to_vec(),
    }
}
