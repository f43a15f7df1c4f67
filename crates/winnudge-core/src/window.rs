use std::time::Duration;

use crate::{Rect, Result};

/// Identifies a display monitor.
///
/// Wraps the raw platform handle value so core code can compare monitors
/// without depending on the platform crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorId(pub usize);

/// A display monitor and its full screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    pub id: MonitorId,
    pub rect: Rect,
}

/// Read side of a window: current geometry and attributes.
///
/// The OS is the source of truth; implementations query it on every call
/// and never cache.
pub trait WindowQuery {
    /// Returns the window bounding rectangle.
    fn rect(&self) -> Result<Rect>;

    /// Returns the window title.
    fn title(&self) -> Result<String>;

    /// Returns the current alpha, or `None` when the window is not layered.
    fn opacity(&self) -> Result<Option<u8>>;

    /// Returns whether the window sits in the topmost z-order band.
    fn is_topmost(&self) -> Result<bool>;

    /// Returns the monitor currently hosting the window.
    fn monitor(&self) -> Result<MonitorId>;
}

/// Write side of a window.
pub trait WindowControl {
    /// Moves and resizes the window without touching its z-order.
    fn set_rect(&self, rect: &Rect) -> Result<()>;

    /// Moves the top-left corner without resizing or changing z-order.
    fn set_position(&self, x: i32, y: i32) -> Result<()>;

    /// Switches the window into layered mode so its alpha can be set.
    fn enable_layered(&self) -> Result<()>;

    /// Sets the window alpha. The window must already be layered.
    fn set_opacity(&self, alpha: u8) -> Result<()>;

    /// Places the window in the topmost band (`true`) or the normal band.
    ///
    /// Position and size are left untouched.
    fn set_topmost(&self, on: bool) -> Result<()>;
}

/// Enumerates display monitors.
pub trait Displays {
    /// Returns all monitors in the order the OS reports them.
    fn monitors(&self) -> Result<Vec<Monitor>>;
}

/// Shows short-lived on-screen messages.
pub trait Notifier {
    /// Displays `text` near `anchor`'s top-left corner and schedules its
    /// dismissal after `duration`. Must return without waiting for it.
    fn notify(&self, anchor: &Rect, text: &str, duration: Duration) -> Result<()>;
}
