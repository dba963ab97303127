//! MacroPad - Die Poll-Schleife über alle Tasten
//!
//! Start: Indikator aus, Start-Animation, Fade zur Grundfarbe.
//! Danach wird jede Taste pro Durchlauf genau einmal gepollt,
//! immer in Array-Reihenfolge.

use embassy_futures::yield_now;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::button::{ButtonMonitor, PressContext};
use crate::light::LightController;
use crate::traits::{Clock, KeyReporter, SmartLedWriter};
use crate::types::{Keycode, StartupAnimation};

/// Gemeinsame Peripherie, die alle Tasten nutzen
///
/// HID-Ausgang, Front-LED, Indikator-LED und Zeitquelle.
pub struct PadIo<K, W, D, I, C, const L: usize> {
    pub reporter: K,
    pub light: LightController<W, D, L>,
    pub indicator: I,
    pub clock: C,
}

impl<K, W, D, I, C, const L: usize> PressContext for PadIo<K, W, D, I, C, L>
where
    K: KeyReporter,
    W: SmartLedWriter,
    D: DelayNs,
    I: OutputPin,
    C: Clock,
{
    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    async fn key_down(&mut self, keycode: Keycode) {
        if let Err(e) = self.reporter.press(keycode).await {
            error!("Key down {} failed: {}", keycode, e);
        }
    }

    async fn key_up(&mut self, keycode: Keycode) {
        if let Err(e) = self.reporter.release(keycode).await {
            error!("Key up {} failed: {}", keycode, e);
        }
    }

    async fn visual_feedback(&mut self) {
        self.light.visual_feedback(&mut self.indicator).await;
    }
}

pub struct MacroPad<P, K, W, D, I, C, const N: usize, const L: usize> {
    buttons: [ButtonMonitor<P>; N],
    io: PadIo<K, W, D, I, C, L>,
}

impl<P, K, W, D, I, C, const N: usize, const L: usize> MacroPad<P, K, W, D, I, C, N, L>
where
    P: InputPin,
    K: KeyReporter,
    W: SmartLedWriter,
    D: DelayNs,
    I: OutputPin,
    C: Clock,
{
    pub fn new(buttons: [ButtonMonitor<P>; N], io: PadIo<K, W, D, I, C, L>) -> Self {
        Self { buttons, io }
    }

    pub fn buttons(&self) -> &[ButtonMonitor<P>; N] {
        &self.buttons
    }

    pub fn io(&self) -> &PadIo<K, W, D, I, C, L> {
        &self.io
    }

    /// Start-Sequenz: Indikator aus, Animation, Fade zur Grundfarbe
    pub async fn startup(&mut self, animation: StartupAnimation) {
        if self.io.indicator.set_high().is_err() {
            error!("Failed to switch indicator LED off");
        }

        let settings = self.io.light.settings();
        info!("Startup animation: {}", animation);
        self.io
            .light
            .startup_animation(
                settings.brightness,
                animation.fade_duration_ms,
                animation.rainbow_step_delay_ms,
                animation.cycles,
            )
            .await;

        self.io
            .light
            .color_fade_brightness(
                settings.base_color,
                u16::from(settings.brightness),
                animation.settle_step_delay_ms,
                animation.settle_delay_ms,
            )
            .await;
        info!("Startup done");
    }

    /// Ein Durchlauf über alle Tasten
    ///
    /// Gibt die Anzahl ausgelöster HID-Events zurück.
    pub async fn poll(&mut self) -> usize {
        let mut events = 0;
        for button in self.buttons.iter_mut() {
            if button.update(&mut self.io).await.is_some() {
                events += 1;
            }
        }
        events
    }

    /// Start-Sequenz und danach endlose Poll-Schleife
    pub async fn run(&mut self, animation: StartupAnimation) -> ! {
        self.startup(animation).await;
        info!("Polling {} buttons", N);
        loop {
            self.poll().await;
            // Executor-Slot für den USB-Task freigeben
            yield_now().await;
        }
    }
}
