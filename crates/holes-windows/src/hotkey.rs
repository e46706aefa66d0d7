use holes_core::Action;
use holes_core::config::{Keybinding, Modifier};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT, MOD_WIN, RegisterHotKey,
    UnregisterHotKey,
};

use crate::keys;

struct Hotkey {
    id: i32,
    action: Action,
}

/// Global hotkeys registered on the daemon's UI thread.
///
/// `WM_HOTKEY` arrives through that thread's message pump, which looks
/// the id up with [`HotkeyManager::action_for`].
#[derive(Default)]
pub struct HotkeyManager {
    hotkeys: Vec<Hotkey>,
}

impl HotkeyManager {

    /// Registers every binding. Unknown keys and combinations already
    /// taken by another application are logged and skipped.
    pub fn register_all(&mut self, bindings: &[Keybinding]) {
        for (i, binding) in bindings.iter().enumerate() {
            let Some(vk) = keys::vk_from_name(&binding.key) else {
                holes_core::log_warn!("Unknown key name in keybinding: {:?}", binding.key);
                continue;
            };

            let modifiers = binding
                .modifiers
                .iter()
                .fold(MOD_NOREPEAT, |acc, m| acc | modifier_flag(m));

            self.register(i as i32 + 1, modifiers, vk, binding.action.clone());
        }
    }

    /// The action bound to a `WM_HOTKEY` id.
    pub fn action_for(&self, hotkey_id: i32) -> Option<&Action> {
        self.hotkeys
            .iter()
            .find(|h| h.id == hotkey_id)
            .map(|h| &h.action)
    }

    fn register(&mut self, id: i32, modifiers: HOT_KEY_MODIFIERS, vk: u32, action: Action) {
        // SAFETY: registers on the current thread's queue; ids are unique
        // within this manager.
        if unsafe { RegisterHotKey(None, id, modifiers, vk) }.is_err() {
            holes_core::log_warn!("Hotkey {id} (vk=0x{vk:02X}) is already taken, skipping");
            return;
        }
        holes_core::log_debug!("Registered hotkey {id} for {action:?}");
        self.hotkeys.push(Hotkey { id, action });
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for hotkey in &self.hotkeys {
            // SAFETY: only ids registered by this manager are released.
            unsafe {
                let _ = UnregisterHotKey(None, hotkey.id);
            }
        }
    }
}

fn modifier_flag(modifier: &Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Win => MOD_WIN,
    }
}
