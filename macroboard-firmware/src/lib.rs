// Library-Root: Hardware-Anbindung und Tasks für das Macro-Keyboard
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod usb;

// Re-exports von macroboard-core
pub use macroboard_core::{
    ButtonMonitor, HidError, KeyReporter, Keycode, LedError, LightController, MacroPad, PadIo,
    SmartLedWriter,
};

use embassy_usb::UsbDevice;
use embassy_usb::class::hid::HidWriter;

use crate::hal::KEYBOARD_REPORT_SIZE;

// ============================================================================
// Type-Aliase für USB-Typen
// ============================================================================
//
// Embassy Tasks dürfen nicht generisch sein, daher werden die
// konkreten Treiber-Typen hier einmal festgelegt.

/// USB-OTG Treiber des ESP32-S3
pub type UsbDriver = esp_hal::otg_fs::asynch::Driver<'static>;

/// USB Device (läuft im usb_task)
pub type MacroboardUsbDevice = UsbDevice<'static, UsbDriver>;

/// HID Writer für den Boot-Keyboard-Report (gehört dem keypad_task)
pub type KeyboardHidWriter = HidWriter<'static, UsbDriver, KEYBOARD_REPORT_SIZE>;
