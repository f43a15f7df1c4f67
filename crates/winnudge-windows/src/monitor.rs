use winnudge_core::{Displays, Error, Monitor, MonitorId, Rect, Result};

use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{EnumDisplayMonitors, HDC, HMONITOR};
use windows::core::BOOL;

/// Win32 monitor enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Displays;

impl Displays for Win32Displays {
    fn monitors(&self) -> Result<Vec<Monitor>> {
        enumerate_monitors()
    }
}

/// Returns every display monitor in the order `EnumDisplayMonitors`
/// reports them, each with its full (not work-area) rectangle.
pub fn enumerate_monitors() -> Result<Vec<Monitor>> {
    let mut monitors: Vec<Monitor> = Vec::new();

    // SAFETY: EnumDisplayMonitors calls our callback synchronously for
    // each monitor. The Vec pointer passed as LPARAM outlives the call.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut monitors as *mut _ as isize),
        )
    };

    if !ok.as_bool() {
        return Err(Error::Platform("EnumDisplayMonitors failed".into()));
    }
    Ok(monitors)
}

unsafe extern "system" fn enum_monitor_callback(
    monitor: HMONITOR,
    _hdc: HDC,
    rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the Vec<Monitor> pointer from enumerate_monitors().
    let monitors = unsafe { &mut *(lparam.0 as *mut Vec<Monitor>) };

    // SAFETY: the OS passes a valid monitor rectangle for the callback's
    // duration; guard against null anyway.
    if let Some(rc) = unsafe { rect.as_ref() } {
        monitors.push(Monitor {
            id: MonitorId(monitor.0 as usize),
            rect: Rect::new(rc.left, rc.top, rc.right, rc.bottom),
        });
    }

    BOOL(1) // keep enumerating
}
