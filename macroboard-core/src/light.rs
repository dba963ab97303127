//! LightController - Besitzt die Front-LED und ihren Zustand
//!
//! Alle Farbübergänge laufen blockierend (aus Sicht der Tasten-Schleife):
//! solange ein Fade oder die Start-Animation läuft, wird nicht gepollt.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::logic::{color_hsv, gamma32, output_scale, rainbow_hue, scale_brightness, step_toward};
use crate::traits::SmartLedWriter;
use crate::types::LightSettings;

/// Dauer des Feedback-Blitzes in ms
pub const FEEDBACK_MS: u32 = 100;

/// Helligkeits-Aufschlag während des Feedback-Blitzes
pub const FEEDBACK_BOOST: u16 = 150;

/// Schrittweite des Farbtons pro Regenbogen-Frame
pub const RAINBOW_HUE_STEP: u32 = 256;

/// Anzahl der Stufen der Rot-Rampe (0..=255)
pub const RAMP_STEPS: u16 = 256;

/// Steuert eine Kette von `N` adressierbaren RGB-LEDs
///
/// Der Pixel-Puffer hält die "logischen" Farben; erst [`LightController::show`]
/// überträgt sie (skaliert mit der Ausgabe-Helligkeit) an die Hardware.
pub struct LightController<W, D, const N: usize> {
    writer: W,
    delay: D,
    pixels: [RGB8; N],
    settings: LightSettings,
    output_brightness: u8,
}

impl<W, D, const N: usize> LightController<W, D, N>
where
    W: SmartLedWriter,
    D: DelayNs,
{
    /// Erstellt einen Controller mit ausgeschalteten Pixeln
    pub fn new(writer: W, delay: D, settings: LightSettings) -> Self {
        Self {
            writer,
            delay,
            pixels: [RGB8::default(); N],
            settings,
            output_brightness: u8::MAX,
        }
    }

    pub fn settings(&self) -> LightSettings {
        self.settings
    }

    pub fn brightness(&self) -> u8 {
        self.settings.brightness
    }

    pub fn base_color(&self) -> RGB8 {
        self.settings.base_color
    }

    /// Aktuelle (logische) Farbe eines Pixels
    pub fn pixel(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    pub fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Globale Helligkeit des Pixel-Treibers (255 = unverändert)
    pub fn set_output_brightness(&mut self, brightness: u8) {
        self.output_brightness = brightness;
    }

    /// Setzt ein Pixel im Puffer (ohne Übertragung)
    pub fn set_pixel(&mut self, index: usize, color: RGB8) {
        match self.pixels.get_mut(index) {
            Some(pixel) => *pixel = color,
            None => warn!("Pixel index out of range: {}", index),
        }
    }

    /// Setzt ein Pixel mit linear skalierter Helligkeit (ohne Übertragung)
    ///
    /// Jeder Kanal wird zu `brightness * c / 255`. Werte über 255 werden
    /// nicht begrenzt, nur auf 8 Bit abgeschnitten.
    pub fn set_pixel_color_brightness(
        &mut self,
        index: usize,
        r: u8,
        g: u8,
        b: u8,
        brightness: u16,
    ) {
        self.set_pixel(index, scale_brightness(RGB8 { r, g, b }, brightness));
    }

    /// Überträgt den Pixel-Puffer an die LEDs
    pub fn show(&mut self) {
        let mut frame = self.pixels;
        if self.output_brightness != u8::MAX {
            for pixel in frame.iter_mut() {
                *pixel = output_scale(*pixel, self.output_brightness);
            }
        }

        if let Err(_e) = self.writer.write(&frame) {
            error!("Failed to write to LED");
        }
    }

    /// Linearer Fade aller Pixel zur Zielfarbe
    ///
    /// Pro Schritt wird jeder Kanal um ±1 bewegt, übertragen und
    /// `step_delay_ms` gewartet. Ist ein Pixel am Ziel, folgt einmal
    /// `settle_delay_ms`.
    pub async fn color_fade(&mut self, target: RGB8, step_delay_ms: u32, settle_delay_ms: u32) {
        for index in 0..N {
            let mut current = self.pixels[index];

            while current != target {
                current = step_toward(current, target);
                self.pixels[index] = current;
                self.show();
                self.delay.delay_ms(step_delay_ms).await;
            }

            self.delay.delay_ms(settle_delay_ms).await;
        }
    }

    /// Wie [`LightController::color_fade`], das Ziel wird vorher mit
    /// `brightness / 255` skaliert
    pub async fn color_fade_brightness(
        &mut self,
        target: RGB8,
        brightness: u16,
        step_delay_ms: u32,
        settle_delay_ms: u32,
    ) {
        let target = scale_brightness(target, brightness);
        self.color_fade(target, step_delay_ms, settle_delay_ms).await;
    }

    /// Einmalige Start-Animation
    ///
    /// 1. Rot-Rampe auf Pixel 0 von (0,0,0) bis (255,0,0) in 256 Schritten,
    ///    Pause `fade_duration_ms / brightness` pro Schritt
    /// 2. `cycles` volle Umläufe über den Farbkreis, 256 Frames pro Umlauf,
    ///    gamma-korrigiert
    pub async fn startup_animation(
        &mut self,
        brightness: u8,
        fade_duration_ms: u32,
        rainbow_step_delay_ms: u32,
        cycles: u32,
    ) {
        let fade_delay = fade_duration_ms / u32::from(brightness.max(1));
        debug!("Startup ramp: {} ms per step", fade_delay);

        for level in 0..RAMP_STEPS {
            self.set_pixel(0, RGB8 { r: level as u8, g: 0, b: 0 });
            self.show();
            self.delay.delay_ms(fade_delay).await;
        }

        for _ in 0..cycles {
            for first_hue in (0..65536u32).step_by(RAINBOW_HUE_STEP as usize) {
                for index in 0..N {
                    let hue = rainbow_hue(first_hue as u16, index, N);
                    self.pixels[index] = gamma32(color_hsv(hue, 255, 255));
                }
                self.show();
                self.delay.delay_ms(rainbow_step_delay_ms).await;
            }
        }
    }

    /// Feedback-Blitz bei Tastendruck
    ///
    /// Pixel 0 leuchtet `FEEDBACK_MS` lang mit `brightness + FEEDBACK_BOOST`,
    /// die Indikator-LED (active-low) ist währenddessen an.
    pub async fn visual_feedback<I: OutputPin>(&mut self, indicator: &mut I) {
        let LightSettings {
            brightness,
            base_color,
        } = self.settings;
        let boosted = u16::from(brightness) + FEEDBACK_BOOST;

        self.set_pixel_color_brightness(0, base_color.r, base_color.g, base_color.b, boosted);
        self.show();
        if indicator.set_low().is_err() {
            error!("Failed to switch indicator LED on");
        }

        self.delay.delay_ms(FEEDBACK_MS).await;

        self.set_pixel_color_brightness(
            0,
            base_color.r,
            base_color.g,
            base_color.b,
            u16::from(brightness),
        );
        self.show();
        if indicator.set_high().is_err() {
            error!("Failed to switch indicator LED off");
        }
    }

    /// Setzt alle Pixel auf die Grundfarbe mit Grund-Helligkeit
    pub fn restore_base(&mut self) {
        let color = scale_brightness(
            self.settings.base_color,
            u16::from(self.settings.brightness),
        );
        self.pixels = [color; N];
        self.show();
    }
}
