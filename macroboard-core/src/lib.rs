//! MacroBoard Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und die Zustandsmaschinen
//! für Tasten und Front-LED.

#![no_std]

#[macro_use]
mod macros;

pub mod button;
pub mod keypad;
pub mod light;
pub mod logic;
pub mod report;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use button::{ButtonMonitor, DEBOUNCE_MS, PressContext};
pub use keypad::{MacroPad, PadIo};
pub use light::{FEEDBACK_BOOST, FEEDBACK_MS, LightController};
pub use logic::{color_hsv, gamma8, gamma32, scale_brightness, step_toward};
pub use report::KeySet;
pub use traits::{Clock, HidError, KeyReporter, LedError, SmartLedWriter};
pub use types::{ButtonState, KeyEvent, Keycode, LightSettings, StartupAnimation};
