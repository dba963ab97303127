//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Digitale Pins und Delays kommen
//! direkt aus `embedded-hal` bzw. `embedded-hal-async`.

use rgb::RGB8;

use crate::types::Keycode;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
/// Ein Aufruf entspricht einem "show": alle Pixel werden übertragen.
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt die komplette Pixel-Kette auf die LEDs
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError>;
}

/// Fehler-Typ für HID-Reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    /// USB nicht konfiguriert oder Endpoint deaktiviert
    Disabled,
    /// Report passt nicht in den Endpoint
    BufferOverflow,
}

/// Trait für die HID-Tastatur-Schnittstelle
///
/// # Implementierungen
/// - **Production:** UsbKeyReporter (embassy-usb HID Writer)
/// - **Testing:** MockKeyReporter (zeichnet Events auf)
#[allow(async_fn_in_trait)]
pub trait KeyReporter {
    /// Meldet dem Host "Taste gedrückt"
    async fn press(&mut self, keycode: Keycode) -> Result<(), HidError>;

    /// Meldet dem Host "Taste losgelassen"
    async fn release(&mut self, keycode: Keycode) -> Result<(), HidError>;
}

/// Monotone Zeitquelle in Millisekunden seit Start
pub trait Clock {
    fn now_ms(&self) -> u64;
}
