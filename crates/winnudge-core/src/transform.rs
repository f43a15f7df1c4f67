//! Pure geometry and opacity math behind the window operations.
//!
//! Nothing here talks to the OS; [`crate::engine`] reads the current state,
//! runs it through these functions and writes the result back.

use crate::{Direction, Monitor, MonitorId, Rect};

/// Alpha change applied per opacity hotkey, independent of the move step.
pub const OPACITY_STEP: u8 = 25;

/// Alpha assumed for a window that has never been made layered.
pub const OPAQUE: u8 = 255;

/// Returns the `(dx, dy)` offset for one step in `direction`.
///
/// Any stored step is accepted; `i32::MIN` negates to `i32::MAX`.
pub fn offset(direction: Direction, step: i32) -> (i32, i32) {
    match direction {
        Direction::Up => (0, step.saturating_neg()),
        Direction::Down => (0, step),
        Direction::Left => (step.saturating_neg(), 0),
        Direction::Right => (step, 0),
    }
}

/// Per-edge multipliers for a resize, applied against the move step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeDeltas {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl EdgeDeltas {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Deltas that push out only the edge facing `direction`.
    pub fn edge(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(1, 0, 0, 0),
            Direction::Right => Self::new(0, 1, 0, 0),
            Direction::Up => Self::new(0, 0, 1, 0),
            Direction::Down => Self::new(0, 0, 0, 1),
        }
    }
}

/// Grows (or, with negative deltas, shrinks) `rect` edge by edge.
///
/// Positive left/top deltas move those edges outward, so the window grows
/// toward that side. Edges saturate at the `i32` range.
pub fn resize(rect: &Rect, deltas: EdgeDeltas, step: i32) -> Rect {
    Rect::new(
        rect.left.saturating_sub(deltas.left.saturating_mul(step)),
        rect.top.saturating_sub(deltas.top.saturating_mul(step)),
        rect.right.saturating_add(deltas.right.saturating_mul(step)),
        rect.bottom.saturating_add(deltas.bottom.saturating_mul(step)),
    )
}

/// Computes the next alpha for an opacity hotkey.
///
/// `None` means the window is not layered yet and counts as fully opaque.
/// The result saturates at 0 and 255.
pub fn next_opacity(current: Option<u8>, increase: bool) -> u8 {
    let current = current.unwrap_or(OPAQUE);
    if increase {
        current.saturating_add(OPACITY_STEP)
    } else {
        current.saturating_sub(OPACITY_STEP)
    }
}

/// Returns the monitor after `current` in enumeration order.
///
/// There is no wrap-around: the last monitor (or an unknown one) has no
/// successor.
pub fn next_monitor(monitors: &[Monitor], current: MonitorId) -> Option<&Monitor> {
    let index = monitors.iter().position(|m| m.id == current)?;
    monitors.get(index + 1)
}

/// Top-left corner that centres a window of `window`'s size on `target`.
pub fn centered_origin(window: &Rect, target: &Rect) -> (i32, i32) {
    (
        target
            .left
            .saturating_add(target.width().saturating_sub(window.width()) / 2),
        target
            .top
            .saturating_add(target.height().saturating_sub(window.height()) / 2),
    )
}

/// Overlay text reporting the topmost state the window actually ended in.
pub fn topmost_message(topmost: bool) -> &'static str {
    if topmost {
        "Always on top turned on"
    } else {
        "Always on top turned off"
    }
}
