use winnudge_core::{Error, MonitorId, Rect, Result, WindowControl, WindowQuery};

use windows::Win32::Foundation::{COLORREF, HWND, RECT};
use windows::Win32::Graphics::Gdi::{MONITOR_DEFAULTTONEAREST, MonitorFromWindow};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GetForegroundWindow, GetLayeredWindowAttributes, GetWindowLongPtrW,
    GetWindowRect, GetWindowTextLengthW, GetWindowTextW, HWND_NOTOPMOST, HWND_TOPMOST,
    LAYERED_WINDOW_ATTRIBUTES_FLAGS, LWA_ALPHA, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    SWP_NOZORDER, SetLayeredWindowAttributes, SetWindowLongPtrW, SetWindowPos, WS_EX_LAYERED,
    WS_EX_TOPMOST,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle. This struct holds it and queries the OS on
/// every call; nothing about the window is cached.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Returns the window that currently receives keyboard input.
    ///
    /// `None` when no window has focus (e.g. while the desktop is switching).
    pub fn foreground() -> Option<Self> {
        // SAFETY: GetForegroundWindow takes no arguments and only reads state.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            None
        } else {
            Some(Self::new(hwnd))
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    fn ex_style(&self) -> u32 {
        // SAFETY: GetWindowLongPtrW only reads the extended style bits.
        unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32 }
    }

    fn set_window_pos(
        &self,
        insert_after: Option<HWND>,
        rect: (i32, i32, i32, i32),
        flags: windows::Win32::UI::WindowsAndMessaging::SET_WINDOW_POS_FLAGS,
    ) -> Result<()> {
        let (x, y, cx, cy) = rect;
        // SAFETY: SetWindowPos with a valid HWND is safe. A stale handle
        // makes the call fail, which is reported as an error.
        unsafe { SetWindowPos(self.hwnd, insert_after, x, y, cx, cy, flags | SWP_NOACTIVATE) }
            .map_err(Error::platform)
    }
}

impl WindowQuery for Window {
    fn rect(&self) -> Result<Rect> {
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect fills `rc` for a valid HWND.
        unsafe { GetWindowRect(self.hwnd, &mut rc) }.map_err(Error::platform)?;
        Ok(Rect::new(rc.left, rc.top, rc.right, rc.bottom))
    }

    fn title(&self) -> Result<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with a valid HWND. They read window text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn opacity(&self) -> Result<Option<u8>> {
        if self.ex_style() & WS_EX_LAYERED.0 == 0 {
            return Ok(None);
        }

        let mut alpha = 0u8;
        let mut flags = LAYERED_WINDOW_ATTRIBUTES_FLAGS::default();
        // SAFETY: GetLayeredWindowAttributes writes into the two locals.
        // It fails for windows layered through UpdateLayeredWindow and for
        // layered windows whose alpha was never set; both render opaque.
        let read = unsafe {
            GetLayeredWindowAttributes(self.hwnd, None, Some(&mut alpha), Some(&mut flags))
        };
        if read.is_err() || flags.0 & LWA_ALPHA.0 == 0 {
            return Ok(Some(u8::MAX));
        }
        Ok(Some(alpha))
    }

    fn is_topmost(&self) -> Result<bool> {
        Ok(self.ex_style() & WS_EX_TOPMOST.0 != 0)
    }

    fn monitor(&self) -> Result<MonitorId> {
        // SAFETY: MonitorFromWindow always returns a monitor with
        // MONITOR_DEFAULTTONEAREST.
        let monitor = unsafe { MonitorFromWindow(self.hwnd, MONITOR_DEFAULTTONEAREST) };
        Ok(MonitorId(monitor.0 as usize))
    }
}

impl WindowControl for Window {
    fn set_rect(&self, rect: &Rect) -> Result<()> {
        self.set_window_pos(
            None,
            (rect.left, rect.top, rect.width(), rect.height()),
            SWP_NOZORDER,
        )
    }

    fn set_position(&self, x: i32, y: i32) -> Result<()> {
        self.set_window_pos(None, (x, y, 0, 0), SWP_NOSIZE | SWP_NOZORDER)
    }

    fn enable_layered(&self) -> Result<()> {
        let style = self.ex_style() | WS_EX_LAYERED.0;
        // SAFETY: SetWindowLongPtrW only updates the extended style bits.
        // It returns the previous value, which may legitimately be zero.
        unsafe { SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, style as isize) };
        Ok(())
    }

    fn set_opacity(&self, alpha: u8) -> Result<()> {
        // SAFETY: valid HWND; the window was made layered by the caller.
        unsafe { SetLayeredWindowAttributes(self.hwnd, COLORREF(0), alpha, LWA_ALPHA) }
            .map_err(Error::platform)
    }

    fn set_topmost(&self, on: bool) -> Result<()> {
        let band = if on { HWND_TOPMOST } else { HWND_NOTOPMOST };
        self.set_window_pos(Some(band), (0, 0, 0, 0), SWP_NOMOVE | SWP_NOSIZE)
    }
}
