// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus macroboard-core für den ESP32-S3.
// Pins und Delays kommen direkt als embedded-hal Implementierungen
// aus esp-hal bzw. embassy-time.

pub mod clock;
pub mod hid;
pub mod led_writer;

pub use clock::EmbassyClock;
pub use hid::{KEYBOARD_REPORT_SIZE, UsbKeyReporter};
pub use led_writer::{LED_BUFFER_SIZE, RmtLedWriter};
