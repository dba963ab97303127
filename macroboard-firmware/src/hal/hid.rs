// USB HID Key Reporter
//
// Hält den 6KRO Boot-Report und schickt ihn bei jeder Änderung
// über den embassy-usb HID Writer an den Host.

use defmt::{debug, warn};
use embassy_usb::class::hid::HidWriter;
use embassy_usb::driver::{Driver, EndpointError};
use macroboard_core::{HidError, KeyReporter, KeySet, Keycode};
use usbd_hid::descriptor::KeyboardReport;

/// Länge des Boot-Keyboard-Reports in Bytes
pub const KEYBOARD_REPORT_SIZE: usize = 8;

fn hid_error(err: EndpointError) -> HidError {
    match err {
        EndpointError::BufferOverflow => HidError::BufferOverflow,
        _ => HidError::Disabled,
    }
}

/// Key Reporter über USB HID (Boot-Keyboard)
pub struct UsbKeyReporter<'d, D: Driver<'d>> {
    writer: HidWriter<'d, D, KEYBOARD_REPORT_SIZE>,
    keys: KeySet,
}

impl<'d, D: Driver<'d>> UsbKeyReporter<'d, D> {
    pub fn new(writer: HidWriter<'d, D, KEYBOARD_REPORT_SIZE>) -> Self {
        Self {
            writer,
            keys: KeySet::new(),
        }
    }

    fn report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: 0,
            reserved: 0,
            leds: 0,
            keycodes: self.keys.keycodes(),
        }
    }

    async fn send(&mut self) -> Result<(), HidError> {
        let report = self.report();
        debug!("HID report: {}", report.keycodes);
        self.writer
            .write_serialize(&report)
            .await
            .map_err(hid_error)
    }
}

impl<'d, D: Driver<'d>> KeyReporter for UsbKeyReporter<'d, D> {
    async fn press(&mut self, keycode: Keycode) -> Result<(), HidError> {
        if !self.keys.press(keycode) {
            if self.keys.is_full() {
                warn!("Report full, dropping {}", keycode);
            }
            return Ok(());
        }
        self.send().await
    }

    async fn release(&mut self, keycode: Keycode) -> Result<(), HidError> {
        if !self.keys.release(keycode) {
            return Ok(());
        }
        self.send().await
    }
}
