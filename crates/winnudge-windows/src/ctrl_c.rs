//! Ctrl+C handling for the listener using `SetConsoleCtrlHandler`.

use std::sync::OnceLock;

use winnudge_core::{Error, Result};

use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};
use windows::Win32::UI::WindowsAndMessaging::{PostThreadMessageW, WM_QUIT};

/// Thread whose message loop is stopped by Ctrl+C. Written once.
static LOOP_THREAD: OnceLock<u32> = OnceLock::new();

/// Makes Ctrl+C (and Ctrl+Break) post `WM_QUIT` to `thread_id`.
pub fn quit_thread_on_ctrl_c(thread_id: u32) -> Result<()> {
    LOOP_THREAD
        .set(thread_id)
        .map_err(|_| Error::Platform("Ctrl+C handler already registered".into()))?;
    unsafe { SetConsoleCtrlHandler(Some(handler), true) }.map_err(Error::platform)
}

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if (ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT)
        && let Some(&thread_id) = LOOP_THREAD.get()
    {
        // SAFETY: posting WM_QUIT to a thread id is always safe; it
        // fails harmlessly if the thread has already exited.
        unsafe {
            let _ = PostThreadMessageW(thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        return windows::core::BOOL(1);
    }
    windows::core::BOOL(0)
}
