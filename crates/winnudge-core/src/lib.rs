pub mod action;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod log;
pub mod rect;
pub mod settings;
pub mod status;
pub mod step;
pub mod transform;
pub mod window;

#[cfg(test)]
mod testing;

pub use action::{Action, Direction};
pub use error::{Error, Result};
pub use rect::Rect;
pub use window::{Displays, Monitor, MonitorId, Notifier, WindowControl, WindowQuery};
