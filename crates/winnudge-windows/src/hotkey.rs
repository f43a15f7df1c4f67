use winnudge_core::Action;
use winnudge_core::config::keybinding::{self, Keybinding, Modifier};

use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN, RegisterHotKey, UnregisterHotKey,
};

use crate::keys;

/// A registered global hotkey.
struct Hotkey {
    id: i32,
    action: Action,
}

/// Manages global hotkey registrations.
///
/// Hotkeys are registered on the current thread's message queue.
/// `WM_HOTKEY` messages arrive via the message pump running on the
/// same thread.
#[derive(Default)]
pub struct HotkeyManager {
    hotkeys: Vec<Hotkey>,
}

impl HotkeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers keybindings from configuration.
    ///
    /// Each keybinding's key name is resolved to a virtual key code and
    /// its modifiers are converted to Win32 flags. Unknown key names and
    /// combinations another program already owns are logged and skipped.
    ///
    /// `MOD_NOREPEAT` is left off so holding a key keeps nudging.
    pub fn register_from_config(&mut self, bindings: &[Keybinding]) {
        for (i, binding) in bindings.iter().enumerate() {
            let id = (i + 1) as i32;

            let Some(vk) = keys::vk_from_name(&binding.key) else {
                tracing::warn!("unknown key name: {:?}", binding.key);
                continue;
            };

            let mut modifiers = HOT_KEY_MODIFIERS(0);
            for m in &binding.modifiers {
                modifiers |= modifier_to_flag(*m);
            }

            if self.register(id, modifiers, vk, binding.action) {
                tracing::debug!("bound {} to {}", keybinding::describe(binding), binding.action);
            } else {
                tracing::warn!(
                    "failed to register {} for {}",
                    keybinding::describe(binding),
                    binding.action
                );
            }
        }
    }

    /// Returns the action bound to a `WM_HOTKEY` id.
    pub fn action(&self, hotkey_id: i32) -> Option<Action> {
        self.hotkeys
            .iter()
            .find(|h| h.id == hotkey_id)
            .map(|h| h.action)
    }

    /// Number of hotkeys that registered successfully.
    pub fn len(&self) -> usize {
        self.hotkeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotkeys.is_empty()
    }

    /// Registers a single hotkey. Returns `false` if the OS refused it.
    fn register(&mut self, id: i32, modifiers: HOT_KEY_MODIFIERS, vk: u32, action: Action) -> bool {
        // SAFETY: RegisterHotKey registers a system-wide hotkey on the
        // current thread's message queue. IDs are unique per manager.
        let result = unsafe { RegisterHotKey(None, id, modifiers, vk) };
        if result.is_err() {
            return false;
        }

        self.hotkeys.push(Hotkey { id, action });
        true
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for hotkey in &self.hotkeys {
            // SAFETY: UnregisterHotKey removes the hotkey registration.
            unsafe {
                let _ = UnregisterHotKey(None, hotkey.id);
            }
        }
    }
}

/// Converts a platform-agnostic modifier to a Win32 hotkey flag.
fn modifier_to_flag(modifier: Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Win => MOD_WIN,
    }
}
