/// Key name to virtual-key code mapping.
pub mod keys;

/// Ctrl+C handling for the listener.
#[cfg(windows)]
pub mod ctrl_c;

/// Global hotkey registration.
#[cfg(windows)]
pub mod hotkey;

/// The hotkey listener loop.
#[cfg(windows)]
pub mod listener;

/// Display monitor enumeration.
#[cfg(windows)]
pub mod monitor;

/// Auto-dismissing on-screen messages.
#[cfg(windows)]
pub mod overlay;

/// Window type wrapping a Win32 `HWND`.
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use window::Window;
