// SmartLED Writer für die Front-LED
//
// Implementiert das SmartLedWriter-Trait aus macroboard-core
// mit dem RMT Peripheral des ESP32-S3.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use macroboard_core::{LedError, SmartLedWriter};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;

/// Buffer-Größe für die LED-Kette (3 Farben * 8 Bits pro LED + 1 Reset)
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware LED Writer
///
/// Nutzt das RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im
/// Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `data_pin`: GPIO9 für die LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        data_pin: esp_hal::peripherals::GPIO9<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

        Ok(Self { led })
    }
}

impl SmartLedWriter for RmtLedWriter<'_> {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        self.led
            .write(pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
