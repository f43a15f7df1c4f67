//! Maps an [`Action`] onto the matching engine operation.

use std::time::Duration;

use crate::engine;
use crate::transform::{self, EdgeDeltas};
use crate::{Action, Displays, Notifier, Result, WindowControl, WindowQuery};

/// Per-invocation inputs that come from persisted settings.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Pixels per move or grow, read fresh before each action.
    pub step: i32,
    /// How long overlays stay on screen.
    pub overlay_duration: Duration,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            step: crate::step::DEFAULT_STEP,
            overlay_duration: engine::OVERLAY_DURATION,
        }
    }
}

/// Runs `action` against `window`.
///
/// Returns a short status line for actions whose outcome is worth
/// reporting (opacity level, pin state, monitor moves), `None` otherwise.
pub fn execute<W, D, N>(
    action: Action,
    window: &W,
    displays: &D,
    notifier: &N,
    ctx: Context,
) -> Result<Option<String>>
where
    W: WindowQuery + WindowControl,
    D: Displays + ?Sized,
    N: Notifier + ?Sized,
{
    let report = match action {
        Action::Move(direction) => {
            engine::move_in(window, direction, ctx.step)?;
            None
        }
        Action::Grow(direction) => {
            engine::resize(window, EdgeDeltas::edge(direction), ctx.step)?;
            None
        }
        Action::IncreaseOpacity => {
            let alpha = engine::adjust_opacity(window, true)?;
            Some(format!("Opacity {alpha}/255"))
        }
        Action::DecreaseOpacity => {
            let alpha = engine::adjust_opacity(window, false)?;
            Some(format!("Opacity {alpha}/255"))
        }
        Action::PinOnTop | Action::UnpinOnTop => {
            let on = action == Action::PinOnTop;
            let topmost = engine::set_always_on_top(window, notifier, on, ctx.overlay_duration)?;
            Some(transform::topmost_message(topmost).to_string())
        }
        Action::NextMonitor => {
            if engine::move_to_adjacent_monitor(window, displays)? {
                Some("Moved to next monitor".to_string())
            } else {
                None
            }
        }
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockDisplays, MockNotifier, MockWindow};
    use crate::{Direction, Rect};

    fn run(action: Action, window: &MockWindow, step: i32) -> Result<Option<String>> {
        let ctx = Context {
            step,
            ..Default::default()
        };
        execute(
            action,
            window,
            &MockDisplays::dual(),
            &MockNotifier::default(),
            ctx,
        )
    }

    #[test]
    fn default_context_uses_default_step() {
        // Assert
        assert_eq!(Context::default().step, 40);
        assert_eq!(Context::default().overlay_duration, Duration::from_secs(2));
    }

    #[test]
    fn move_uses_context_step() {
        // Arrange
        let window = MockWindow::new(Rect::new(100, 100, 500, 400));

        // Act
        let report = run(Action::Move(Direction::Right), &window, 40).unwrap();

        // Assert
        assert_eq!(report, None);
        assert_eq!(window.rect.get(), Rect::new(140, 100, 540, 400));
    }

    #[test]
    fn grow_pushes_the_named_edge() {
        // Arrange
        let window = MockWindow::new(Rect::new(100, 100, 500, 400));

        // Act
        run(Action::Grow(Direction::Down), &window, 15).unwrap();

        // Assert
        assert_eq!(window.rect.get(), Rect::new(100, 100, 500, 415));
    }

    #[test]
    fn opacity_actions_report_level() {
        // Arrange
        let window = MockWindow::new(Rect::new(0, 0, 10, 10));

        // Act
        let report = run(Action::DecreaseOpacity, &window, 40).unwrap();

        // Assert
        assert_eq!(report.as_deref(), Some("Opacity 230/255"));
    }

    #[test]
    fn pin_and_unpin_report_state() {
        // Arrange
        let window = MockWindow::new(Rect::new(0, 0, 10, 10));

        // Act
        let pinned = run(Action::PinOnTop, &window, 40).unwrap();
        let unpinned = run(Action::UnpinOnTop, &window, 40).unwrap();

        // Assert
        assert_eq!(pinned.as_deref(), Some("Always on top turned on"));
        assert_eq!(unpinned.as_deref(), Some("Always on top turned off"));
    }

    #[test]
    fn next_monitor_reports_only_when_moved() {
        // Arrange
        let window = MockWindow::new(Rect::new(0, 0, 100, 100));

        // Act
        let first = run(Action::NextMonitor, &window, 40).unwrap();
        window.monitor.set(crate::MonitorId(2));
        let second = run(Action::NextMonitor, &window, 40).unwrap();

        // Assert
        assert_eq!(first.as_deref(), Some("Moved to next monitor"));
        assert_eq!(second, None);
    }

    #[test]
    fn platform_errors_are_returned() {
        // Arrange
        let mut window = MockWindow::new(Rect::new(0, 0, 10, 10));
        window.fail_writes = true;

        // Act / Assert
        assert!(run(Action::PinOnTop, &window, 40).is_err());
    }
}
