// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Alles ist zur Compile-Zeit fest; es gibt keine Laufzeit-Konfiguration.

use macroboard_core::{Keycode, LightSettings, StartupAnimation};
use rgb::RGB8;

// ============================================================================
// Tasten
// ============================================================================

/// Anzahl der Tasten
pub const BUTTON_COUNT: usize = 8;

/// Keycodes der Tasten in Poll-Reihenfolge (F13-F20)
///
/// Die Pins dazu (GPIO1-GPIO8) werden in `main.rs` zugeordnet,
/// weil esp-hal jeden Pin als eigenen Typ führt.
pub const BUTTON_KEYS: [Keycode; BUTTON_COUNT] = [
    Keycode::F13,
    Keycode::F14,
    Keycode::F15,
    Keycode::F16,
    Keycode::F17,
    Keycode::F18,
    Keycode::F19,
    Keycode::F20,
];

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 9;

/// GPIO-Pin für die Indikator-LED (active-low)
pub const INDICATOR_GPIO_PIN: u8 = 10;

/// Anzahl der LEDs in der Kette
pub const LED_COUNT: usize = 1;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Grund-Helligkeit (0-255)
pub const LED_BRIGHTNESS: u8 = 80;

/// Grundfarbe der Front-LED
pub const LED_BASE_COLOR: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

/// Helligkeit und Grundfarbe als ein Wert
pub const LIGHT_SETTINGS: LightSettings = LightSettings {
    brightness: LED_BRIGHTNESS,
    base_color: LED_BASE_COLOR,
};

/// Start-Animation: 1 s Rot-Rampe, ein Regenbogen-Umlauf mit 15 ms/Frame,
/// danach Fade zur Grundfarbe mit 5 ms/Schritt
pub const STARTUP_ANIMATION: StartupAnimation = StartupAnimation {
    fade_duration_ms: 1000,
    rainbow_step_delay_ms: 15,
    cycles: 1,
    settle_step_delay_ms: 5,
    settle_delay_ms: 0,
};

// ============================================================================
// USB Konfiguration
// ============================================================================

/// USB Vendor-ID (pid.codes Test-VID)
pub const USB_VID: u16 = 0x1209;

/// USB Product-ID
pub const USB_PID: u16 = 0x0001;

pub const USB_MANUFACTURER: &str = "MacroBoard";
pub const USB_PRODUCT: &str = "MacroBoard Mini Macro Keyboard";
pub const USB_SERIAL_NUMBER: &str = "MB-0001";

/// Maximale Stromaufnahme in mA
pub const USB_MAX_POWER_MA: u16 = 100;

/// HID Poll-Intervall in ms
pub const HID_POLL_MS: u8 = 10;

/// Endpoint-Größe für den Boot-Keyboard-Report
pub const HID_MAX_PACKET_SIZE: u16 = 8;

/// Buffer-Größe für OUT-Endpoints des USB-OTG Treibers
pub const USB_EP_OUT_BUFFER_SIZE: usize = 1024;

/// Descriptor-Buffer-Größen für embassy-usb
pub const USB_CONFIG_DESCRIPTOR_SIZE: usize = 256;
pub const USB_BOS_DESCRIPTOR_SIZE: usize = 256;
pub const USB_MSOS_DESCRIPTOR_SIZE: usize = 256;
pub const USB_CONTROL_BUFFER_SIZE: usize = 64;
