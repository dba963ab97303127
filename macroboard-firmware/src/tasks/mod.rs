// Task-Modul: Enthält alle Embassy Tasks
//
// Der Keypad-Task besitzt Tasten, LED und HID Writer allein;
// der USB-Task treibt nur den USB-Stack.

pub mod keypad;
pub mod usb;

// Re-export Tasks für einfachen Import
pub use keypad::keypad_task;
pub use usb::usb_task;
