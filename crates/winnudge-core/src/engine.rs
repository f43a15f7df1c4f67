//! The window transform engine.
//!
//! Each operation reads the window's current state through [`WindowQuery`],
//! computes the new state with [`crate::transform`] and writes it back
//! through [`WindowControl`]. No state survives between calls.

use std::time::Duration;

use crate::transform::{self, EdgeDeltas};
use crate::{Direction, Displays, Notifier, Result, WindowControl, WindowQuery};

/// Default lifetime of the transient overlay.
pub const OVERLAY_DURATION: Duration = Duration::from_millis(2000);

/// Shifts the window by `(dx, dy)` keeping its size and z-order.
pub fn translate<W>(window: &W, dx: i32, dy: i32) -> Result<()>
where
    W: WindowQuery + WindowControl,
{
    let rect = window.rect()?;
    let target = rect.translated(dx, dy);
    tracing::debug!(?rect, ?target, "translate");
    window.set_rect(&target)
}

/// Moves the window one `step` in `direction`.
pub fn move_in<W>(window: &W, direction: Direction, step: i32) -> Result<()>
where
    W: WindowQuery + WindowControl,
{
    let (dx, dy) = transform::offset(direction, step);
    translate(window, dx, dy)
}

/// Pushes the window's edges outward by `deltas` multiples of `step`.
pub fn resize<W>(window: &W, deltas: EdgeDeltas, step: i32) -> Result<()>
where
    W: WindowQuery + WindowControl,
{
    let rect = window.rect()?;
    let target = transform::resize(&rect, deltas, step);
    tracing::debug!(?rect, ?target, ?deltas, "resize");
    window.set_rect(&target)
}

/// Raises or lowers the window's opacity by [`transform::OPACITY_STEP`].
///
/// A window that is not layered yet is switched to layered mode first and
/// treated as fully opaque. Returns the alpha that was applied.
pub fn adjust_opacity<W>(window: &W, increase: bool) -> Result<u8>
where
    W: WindowQuery + WindowControl,
{
    let current = window.opacity()?;
    if current.is_none() {
        window.enable_layered()?;
    }
    let alpha = transform::next_opacity(current, increase);
    tracing::debug!(?current, alpha, "adjust opacity");
    window.set_opacity(alpha)?;
    Ok(alpha)
}

/// Pins the window above all others (`on`) or releases it, then shows an
/// overlay describing the state the window actually ended in.
///
/// Returns the resulting topmost state.
pub fn set_always_on_top<W, N>(window: &W, notifier: &N, on: bool, duration: Duration) -> Result<bool>
where
    W: WindowQuery + WindowControl,
    N: Notifier + ?Sized,
{
    window.set_topmost(on)?;
    let topmost = window.is_topmost()?;
    if topmost != on {
        tracing::warn!(requested = on, topmost, "topmost state did not change");
    }
    show_transient_overlay(window, notifier, transform::topmost_message(topmost), duration)?;
    Ok(topmost)
}

/// Centres the window on the monitor that follows its current one.
///
/// Returns `false` without moving when the window is already on the last
/// monitor.
pub fn move_to_adjacent_monitor<W, D>(window: &W, displays: &D) -> Result<bool>
where
    W: WindowQuery + WindowControl,
    D: Displays + ?Sized,
{
    let monitors = displays.monitors()?;
    let current = window.monitor()?;
    let Some(next) = transform::next_monitor(&monitors, current) else {
        tracing::debug!(?current, count = monitors.len(), "no next monitor");
        return Ok(false);
    };

    let rect = window.rect()?;
    let (x, y) = transform::centered_origin(&rect, &next.rect);
    tracing::debug!(from = ?current, to = ?next.id, x, y, "move to next monitor");
    window.set_position(x, y)?;
    Ok(true)
}

/// Shows `message` under the window's title near its top-left corner.
///
/// The notifier dismisses the overlay on its own after `duration`.
pub fn show_transient_overlay<W, N>(
    window: &W,
    notifier: &N,
    message: &str,
    duration: Duration,
) -> Result<()>
where
    W: WindowQuery,
    N: Notifier + ?Sized,
{
    let title = window.title()?;
    let rect = window.rect()?;
    notifier.notify(&rect, &format!("{title}\n{message}"), duration)
}
