use winnudge_core::config::{Config, Keybinding};
use winnudge_core::dispatch::{self, Context};
use winnudge_core::step::StepStore;
use winnudge_core::{Action, Error, Result};

use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

use crate::ctrl_c;
use crate::hotkey::HotkeyManager;
use crate::monitor::Win32Displays;
use crate::overlay::Overlay;
use crate::window::Window;

/// The hotkey listener.
///
/// Owns the hotkey registrations and the overlay for the thread that
/// created it; [`Listener::run`] must be called on that same thread.
pub struct Listener {
    hotkeys: HotkeyManager,
    overlay: Overlay,
    displays: Win32Displays,
    steps: StepStore,
    config: Config,
}

impl Listener {
    /// Registers `bindings` on the current thread and hooks Ctrl+C.
    ///
    /// Fails when not a single hotkey could be registered.
    pub fn start(config: Config, bindings: &[Keybinding], steps: StepStore) -> Result<Self> {
        // SAFETY: GetCurrentThreadId has no preconditions.
        let thread_id = unsafe { GetCurrentThreadId() };
        ctrl_c::quit_thread_on_ctrl_c(thread_id)?;

        let mut hotkeys = HotkeyManager::new();
        hotkeys.register_from_config(bindings);
        if hotkeys.is_empty() {
            return Err(Error::Platform("no hotkey could be registered".into()));
        }
        tracing::info!(
            "registered {} of {} hotkeys",
            hotkeys.len(),
            bindings.len()
        );

        let overlay = Overlay::new(
            config.overlay.background_color(),
            config.overlay.foreground_color(),
        );

        Ok(Self {
            hotkeys,
            overlay,
            displays: Win32Displays,
            steps,
            config,
        })
    }

    /// Runs the message pump until `WM_QUIT` (Ctrl+C or process stop).
    ///
    /// Hotkeys are handled inline, one at a time. Overlay timers arrive
    /// through the same pump.
    pub fn run(&self) {
        let mut msg = MSG::default();

        // GetMessageW returns -1 on error and 0 on WM_QUIT.
        while unsafe { GetMessageW(&mut msg, None, 0, 0) }.0 > 0 {
            if msg.message == WM_HOTKEY {
                if let Some(action) = self.hotkeys.action(msg.wParam.0 as i32) {
                    self.handle(action);
                }
                continue;
            }

            unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
        tracing::info!("hotkey listener stopped");
    }

    /// Runs one action against the window focused right now.
    fn handle(&self, action: Action) {
        let Some(window) = Window::foreground() else {
            tracing::debug!("{action}: no foreground window, skipped");
            return;
        };

        let ctx = Context {
            step: self.steps.load(),
            overlay_duration: self.config.overlay.duration(),
        };
        match dispatch::execute(action, &window, &self.displays, &self.overlay, ctx) {
            Ok(Some(report)) => println!("{report}"),
            Ok(None) => {}
            Err(e) => tracing::warn!("{action} failed: {e}"),
        }
    }
}

/// Runs a single action against the current foreground window.
///
/// Used by `winnudge do`. The overlay needs a message pump to be
/// dismissed, so this pumps messages until just past the overlay
/// duration when the action showed one.
pub fn run_once(action: Action, config: &Config, steps: &StepStore) -> Result<Option<String>> {
    let Some(window) = Window::foreground() else {
        return Ok(None);
    };
    let overlay = Overlay::new(
        config.overlay.background_color(),
        config.overlay.foreground_color(),
    );
    let ctx = Context {
        step: steps.load(),
        overlay_duration: config.overlay.duration(),
    };
    let report = dispatch::execute(action, &window, &Win32Displays, &overlay, ctx)?;

    if matches!(action, Action::PinOnTop | Action::UnpinOnTop) {
        pump_for(config.overlay.duration() + std::time::Duration::from_millis(100));
    }
    Ok(report)
}

/// Dispatches window messages for `duration`, then returns.
fn pump_for(duration: std::time::Duration) {
    use windows::Win32::UI::WindowsAndMessaging::{PM_REMOVE, PeekMessageW};

    let deadline = std::time::Instant::now() + duration;
    let mut msg = MSG::default();
    while std::time::Instant::now() < deadline {
        unsafe {
            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(15));
    }
}
