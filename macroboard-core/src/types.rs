//! Core Types für das Macro-Keyboard
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// HID Usage-ID aus der Keyboard/Keypad-Page (0x07)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keycode(pub u8);

impl Keycode {
    /// Platzhalter im Boot-Report für einen freien Slot
    pub const NONE: Keycode = Keycode(0x00);

    // Zusatz-Funktionstasten, die kein Standard-Layout belegt
    pub const F13: Keycode = Keycode(0x68);
    pub const F14: Keycode = Keycode(0x69);
    pub const F15: Keycode = Keycode(0x6A);
    pub const F16: Keycode = Keycode(0x6B);
    pub const F17: Keycode = Keycode(0x6C);
    pub const F18: Keycode = Keycode(0x6D);
    pub const F19: Keycode = Keycode(0x6E);
    pub const F20: Keycode = Keycode(0x6F);
    pub const F21: Keycode = Keycode(0x70);
    pub const F22: Keycode = Keycode(0x71);
    pub const F23: Keycode = Keycode(0x72);
    pub const F24: Keycode = Keycode(0x73);

    pub const fn usage(self) -> u8 {
        self.0
    }
}

/// Entprellter Zustand einer Taste
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

/// HID-Ereignis, das eine akzeptierte Zustandsänderung auslöst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyEvent {
    Down(Keycode),
    Up(Keycode),
}

impl KeyEvent {
    pub fn keycode(self) -> Keycode {
        match self {
            KeyEvent::Down(kc) | KeyEvent::Up(kc) => kc,
        }
    }
}

/// Helligkeit und Grundfarbe der Front-LED
///
/// Ersetzt die globalen Variablen der Arduino-Welt; wird beim Start
/// einmal gesetzt und danach nur gelesen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightSettings {
    /// Grund-Helligkeit (0-255)
    pub brightness: u8,
    /// Grundfarbe vor der Helligkeits-Skalierung
    pub base_color: RGB8,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            brightness: 80,
            base_color: RGB8 { r: 255, g: 0, b: 0 },
        }
    }
}

/// Parameter der Start-Animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartupAnimation {
    /// Gesamtdauer der Rot-Rampe in ms (wird durch die Helligkeit geteilt)
    pub fade_duration_ms: u32,
    /// Pause nach jedem Regenbogen-Frame in ms
    pub rainbow_step_delay_ms: u32,
    /// Anzahl voller Farbkreis-Umläufe
    pub cycles: u32,
    /// Schritt-Pause beim abschließenden Fade zur Grundfarbe
    pub settle_step_delay_ms: u32,
    /// Pause nach dem abschließenden Fade
    pub settle_delay_ms: u32,
}

impl Default for StartupAnimation {
    fn default() -> Self {
        Self {
            fade_duration_ms: 1000,
            rainbow_step_delay_ms: 15,
            cycles: 1,
            settle_step_delay_ms: 5,
            settle_delay_ms: 0,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LightSettings {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LightSettings {{ brightness: {}, rgb: ({}, {}, {}) }}",
            self.brightness,
            self.base_color.r,
            self.base_color.g,
            self.base_color.b
        )
    }
}
