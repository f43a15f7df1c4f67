use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A screen direction. For resizing it names the edge that grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// An operation on the foreground window, triggered by a hotkey or the CLI.
///
/// Actions serialize as kebab-case names (`move-left`, `grow-up`,
/// `opacity-down`, `pin-on-top`, ...), which is what `keybindings.toml`
/// and `winnudge do` accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    /// Shift the window one move step in a direction.
    Move(Direction),
    /// Push one edge outward by one move step.
    Grow(Direction),
    /// Raise opacity by one opacity step.
    IncreaseOpacity,
    /// Lower opacity by one opacity step.
    DecreaseOpacity,
    /// Put the window in the topmost band.
    PinOnTop,
    /// Return the window to the normal band.
    UnpinOnTop,
    /// Centre the window on the next monitor in OS order.
    NextMonitor,
}

impl Action {
    /// Every action, in the order the default keybindings list them.
    pub fn all() -> Vec<Action> {
        let mut actions: Vec<Action> = Direction::ALL.iter().map(|&d| Self::Move(d)).collect();
        actions.extend(Direction::ALL.iter().map(|&d| Self::Grow(d)));
        actions.extend([
            Self::IncreaseOpacity,
            Self::DecreaseOpacity,
            Self::UnpinOnTop,
            Self::PinOnTop,
            Self::NextMonitor,
        ]);
        actions
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(d) => write!(f, "move-{}", d.as_str()),
            Self::Grow(d) => write!(f, "grow-{}", d.as_str()),
            Self::IncreaseOpacity => f.write_str("opacity-up"),
            Self::DecreaseOpacity => f.write_str("opacity-down"),
            Self::PinOnTop => f.write_str("pin-on-top"),
            Self::UnpinOnTop => f.write_str("unpin-on-top"),
            Self::NextMonitor => f.write_str("next-monitor"),
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let action = match name.as_str() {
            "opacity-up" => Some(Self::IncreaseOpacity),
            "opacity-down" => Some(Self::DecreaseOpacity),
            "pin-on-top" => Some(Self::PinOnTop),
            "unpin-on-top" => Some(Self::UnpinOnTop),
            "next-monitor" => Some(Self::NextMonitor),
            other => {
                if let Some(dir) = other.strip_prefix("move-") {
                    Direction::parse(dir).map(Self::Move)
                } else if let Some(dir) = other.strip_prefix("grow-") {
                    Direction::parse(dir).map(Self::Grow)
                } else {
                    None
                }
            }
        };
        action.ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

impl TryFrom<String> for Action {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_parses_from_its_name() {
        for action in Action::all() {
            // Act
            let parsed: Action = action.to_string().parse().unwrap();

            // Assert
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        // Assert
        assert_eq!(
            "Move-Left".parse::<Action>().unwrap(),
            Action::Move(Direction::Left)
        );
        assert_eq!(
            " GROW-UP ".parse::<Action>().unwrap(),
            Action::Grow(Direction::Up)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        // Assert
        assert!("move-sideways".parse::<Action>().is_err());
        assert!("focus-left".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn all_lists_thirteen_distinct_actions() {
        // Act
        let actions = Action::all();

        // Assert
        assert_eq!(actions.len(), 13);
        for (i, a) in actions.iter().enumerate() {
            assert!(!actions[i + 1..].contains(a), "{a} listed twice");
        }
    }
}
