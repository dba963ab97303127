// Keypad Task - Start-Animation und Poll-Schleife über alle Tasten
use defmt::info;
use embassy_time::Delay;
use esp_hal::gpio::{Input, Output};
use esp_hal_smartled::smart_led_buffer;
use macroboard_core::{ButtonMonitor, Keycode, LightController, MacroPad, PadIo};

use crate::config::{
    BUTTON_COUNT, BUTTON_KEYS, INDICATOR_GPIO_PIN, LED_BRIGHTNESS, LED_COUNT, LED_GPIO_PIN,
    LIGHT_SETTINGS, RMT_CLOCK_MHZ, STARTUP_ANIMATION,
};
use crate::KeyboardHidWriter;
use crate::hal::{EmbassyClock, RmtLedWriter, UsbKeyReporter};

/// Keypad Task - die einzige Schleife, die Tasten und LED anfasst
///
/// Übernimmt die LED-Initialisierung und ruft dann die Poll-Schleife
/// aus macroboard-core auf. Fades und Animationen blockieren das
/// Polling, bis sie fertig sind.
///
/// # Parameter
/// - `buttons`: Eingänge mit Pull-Up, in Poll-Reihenfolge
/// - `indicator`: Indikator-LED (active-low)
/// - `led_pin`: GPIO9 für die LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `hid_writer`: HID Writer des USB Keyboards
#[embassy_executor::task]
pub async fn keypad_task(
    buttons: [Input<'static>; BUTTON_COUNT],
    indicator: Output<'static>,
    led_pin: esp_hal::peripherals::GPIO9<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    hid_writer: KeyboardHidWriter,
) {
    // Buffer für SmartLED Daten erstellen
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);
    let led = RmtLedWriter::new(led_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
        .expect("Failed to initialize RMT");

    let mut light = LightController::<_, _, LED_COUNT>::new(led, Delay, LIGHT_SETTINGS);
    // Globale Treiber-Helligkeit wie beim Neopixel-Treiber (setBrightness)
    light.set_output_brightness(LED_BRIGHTNESS);
    info!(
        "LED on GPIO{}, indicator on GPIO{}, {}",
        LED_GPIO_PIN, INDICATOR_GPIO_PIN, LIGHT_SETTINGS
    );

    // Beide Arrays haben BUTTON_COUNT Einträge, Taste i bekommt Keycode i
    let mut keys = BUTTON_KEYS.into_iter();
    let monitors =
        buttons.map(|pin| ButtonMonitor::new(keys.next().unwrap_or(Keycode::NONE), pin));

    let io = PadIo {
        reporter: UsbKeyReporter::new(hid_writer),
        light,
        indicator,
        clock: EmbassyClock,
    };

    MacroPad::new(monitors, io).run(STARTUP_ANIMATION).await;
}
