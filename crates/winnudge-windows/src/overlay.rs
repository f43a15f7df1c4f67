use std::cell::Cell;
use std::sync::Once;
use std::time::Duration;

use winnudge_core::settings::Color;
use winnudge_core::{Error, Notifier, Rect, Result};

use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreateSolidBrush, DEFAULT_GUI_FONT, DT_CALCRECT, DT_LEFT, DT_NOPREFIX,
    DeleteObject, DrawTextW, EndPaint, FillRect, GetDC, GetStockObject, PAINTSTRUCT, ReleaseDC,
    SelectObject, SetBkMode, SetTextColor, TRANSPARENT,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetClientRect, KillTimer, RegisterClassW,
    SW_SHOWNOACTIVATE, SetTimer, ShowWindow, WM_PAINT, WM_TIMER, WNDCLASSW, WS_EX_NOACTIVATE,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};
use windows::core::{PCWSTR, w};

/// Inner margin between the overlay edge and its text, in pixels.
const PADDING: i32 = 6;

/// Timer id used for the dismissal timer on each overlay window.
const DISMISS_TIMER: usize = 1;

static REGISTER_CLASS: Once = Once::new();

// Overlay colors for windows created on this thread, read by the WNDPROC.
thread_local! {
    static COLORS: Cell<(COLORREF, COLORREF)> =
        const { Cell::new((COLORREF(0x0000_FFFF), COLORREF(0))) };
}

/// Borderless topmost label that closes itself after a delay.
///
/// Each call to [`Notifier::notify`] creates a popup window and arms a
/// one-shot `SetTimer`; the `WM_TIMER` handler destroys the window. The
/// creating thread must run a message pump, which the listener does.
pub struct Overlay {
    _private: (),
}

impl Overlay {
    pub fn new(background: Color, foreground: Color) -> Self {
        COLORS.with(|c| c.set((colorref(background), colorref(foreground))));
        ensure_class_registered();
        Self { _private: () }
    }
}

impl Notifier for Overlay {
    fn notify(&self, anchor: &Rect, text: &str, duration: Duration) -> Result<()> {
        let mut wide: Vec<u16> = text.encode_utf16().collect();
        let (width, height) = measure(&mut wide);
        wide.push(0);

        // SAFETY: the class is registered and `wide` is null-terminated
        // and outlives the call, which copies it into the window text.
        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
                w!("WinnudgeOverlay"),
                PCWSTR(wide.as_ptr()),
                WS_POPUP,
                anchor.left,
                anchor.top,
                width,
                height,
                None,
                None,
                None,
                None,
            )
        }
        .map_err(Error::platform)?;

        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        // SAFETY: hwnd was just created on this thread. SW_SHOWNOACTIVATE
        // keeps keyboard focus on the window the user is working with.
        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
            if SetTimer(Some(hwnd), DISMISS_TIMER, millis, None) == 0 {
                let _ = DestroyWindow(hwnd);
                return Err(Error::Platform("SetTimer failed".into()));
            }
        }
        Ok(())
    }
}

fn colorref(color: Color) -> COLORREF {
    COLORREF(u32::from(color.r) | (u32::from(color.g) << 8) | (u32::from(color.b) << 16))
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(overlay_wnd_proc),
            lpszClassName: w!("WinnudgeOverlay"),
            ..Default::default()
        };
        unsafe {
            if RegisterClassW(&wc) == 0 {
                tracing::error!("failed to register WinnudgeOverlay class");
            }
        }
    });
}

/// Returns the overlay size needed for `text` in the default GUI font.
fn measure(text: &mut [u16]) -> (i32, i32) {
    let mut rc = RECT::default();
    // SAFETY: the screen DC is released before returning; the selected
    // stock font does not need to be deleted.
    unsafe {
        let dc = GetDC(None);
        let old = SelectObject(dc, GetStockObject(DEFAULT_GUI_FONT));
        DrawTextW(dc, text, &mut rc, DT_CALCRECT | DT_LEFT | DT_NOPREFIX);
        SelectObject(dc, old);
        ReleaseDC(None, dc);
    }
    (rc.right - rc.left + PADDING * 2, rc.bottom - rc.top + PADDING * 2)
}

fn paint(hwnd: HWND) {
    let (background, foreground) = COLORS.with(Cell::get);
    let mut text = window_text(hwnd);

    // SAFETY: BeginPaint/EndPaint bracket all drawing; the brush is
    // deleted after use.
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let dc = BeginPaint(hwnd, &mut ps);

        let mut rc = RECT::default();
        let _ = GetClientRect(hwnd, &mut rc);
        let brush = CreateSolidBrush(background);
        FillRect(dc, &rc, brush);
        let _ = DeleteObject(brush.into());

        let old = SelectObject(dc, GetStockObject(DEFAULT_GUI_FONT));
        SetBkMode(dc, TRANSPARENT);
        SetTextColor(dc, foreground);
        let mut text_rc = RECT {
            left: rc.left + PADDING,
            top: rc.top + PADDING,
            right: rc.right - PADDING,
            bottom: rc.bottom - PADDING,
        };
        DrawTextW(dc, &mut text, &mut text_rc, DT_LEFT | DT_NOPREFIX);
        SelectObject(dc, old);

        let _ = EndPaint(hwnd, &ps);
    }
}

fn window_text(hwnd: HWND) -> Vec<u16> {
    use windows::Win32::UI::WindowsAndMessaging::{GetWindowTextLengthW, GetWindowTextW};

    // SAFETY: reads this thread's own overlay window text.
    unsafe {
        let length = GetWindowTextLengthW(hwnd);
        let mut buffer = vec![0u16; (length + 1) as usize];
        let copied = GetWindowTextW(hwnd, &mut buffer);
        buffer.truncate(copied as usize);
        buffer
    }
}

unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_PAINT => {
            paint(hwnd);
            LRESULT(0)
        }
        WM_TIMER if wparam.0 == DISMISS_TIMER => {
            unsafe {
                let _ = KillTimer(Some(hwnd), DISMISS_TIMER);
                let _ = DestroyWindow(hwnd);
            }
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
