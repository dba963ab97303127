//! Tastenzustand für den HID Boot-Keyboard-Report (6KRO)

use crate::types::Keycode;

/// Anzahl Tasten-Slots im Boot-Report
pub const REPORT_SLOTS: usize = 6;

/// Menge der aktuell gedrückten Tasten
///
/// Verhält sich wie die Arduino Keyboard-Library: eine Taste belegt den
/// ersten freien Slot, ist kein Slot frei, wird sie verworfen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySet {
    slots: [u8; REPORT_SLOTS],
}

impl KeySet {
    pub const fn new() -> Self {
        Self {
            slots: [Keycode::NONE.0; REPORT_SLOTS],
        }
    }

    /// Fügt eine Taste hinzu; `true` wenn sich der Report geändert hat
    pub fn press(&mut self, keycode: Keycode) -> bool {
        if keycode == Keycode::NONE || self.contains(keycode) {
            return false;
        }

        match self.slots.iter_mut().find(|slot| **slot == Keycode::NONE.0) {
            Some(slot) => {
                *slot = keycode.0;
                true
            }
            None => false,
        }
    }

    /// Entfernt eine Taste; `true` wenn sich der Report geändert hat
    pub fn release(&mut self, keycode: Keycode) -> bool {
        let mut changed = false;
        for slot in self.slots.iter_mut().filter(|slot| **slot == keycode.0) {
            *slot = Keycode::NONE.0;
            changed = true;
        }
        changed && keycode != Keycode::NONE
    }

    pub fn contains(&self, keycode: Keycode) -> bool {
        self.slots.contains(&keycode.0)
    }

    pub fn is_full(&self) -> bool {
        !self.slots.contains(&Keycode::NONE.0)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| **slot != Keycode::NONE.0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots in Report-Reihenfolge
    pub fn keycodes(&self) -> [u8; REPORT_SLOTS] {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_idempotent() {
        let mut keys = KeySet::new();
        assert!(keys.press(Keycode::F13));
        assert!(!keys.press(Keycode::F13));
        assert_eq!(keys.len(), 1);
        assert_eq!(keys.keycodes(), [0x68, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_seventh_key_is_rejected() {
        let mut keys = KeySet::new();
        for usage in 0x68..0x6E {
            assert!(keys.press(Keycode(usage)));
        }
        assert!(keys.is_full());
        assert!(!keys.press(Keycode::F19));
        assert!(!keys.contains(Keycode::F19));
    }

    #[test]
    fn test_release_frees_slot() {
        let mut keys = KeySet::new();
        keys.press(Keycode::F13);
        keys.press(Keycode::F14);
        assert!(keys.release(Keycode::F13));
        assert!(!keys.release(Keycode::F13));
        assert_eq!(keys.keycodes(), [0, 0x69, 0, 0, 0, 0]);

        keys.press(Keycode::F15);
        assert_eq!(keys.keycodes(), [0x6A, 0x69, 0, 0, 0, 0]);
    }

    #[test]
    fn test_none_keycode_is_ignored() {
        let mut keys = KeySet::new();
        assert!(!keys.press(Keycode::NONE));
        assert!(!keys.release(Keycode::NONE));
        assert!(keys.is_empty());
    }
}
