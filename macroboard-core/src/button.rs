//! ButtonMonitor - Entprellung und Press/Release-Zustandsmaschine
//!
//! Eine Instanz pro physischer Taste. Die Tasten hängen mit Pull-Up am
//! Eingang und ziehen beim Drücken auf GND (active-low).

use embedded_hal::digital::InputPin;

use crate::types::{ButtonState, KeyEvent, Keycode};

/// Minimaler Abstand zwischen zwei akzeptierten Flanken in ms
pub const DEBOUNCE_MS: u64 = 50;

/// Seiteneffekte einer akzeptierten Zustandsänderung
///
/// Wird von `PadIo` (HID + LED) implementiert, in Tests von Recordern.
#[allow(async_fn_in_trait)]
pub trait PressContext {
    /// Aktuelle Zeit in ms
    fn now_ms(&self) -> u64;

    async fn key_down(&mut self, keycode: Keycode);

    async fn key_up(&mut self, keycode: Keycode);

    /// Optisches Feedback nach einem Tastendruck
    async fn visual_feedback(&mut self);
}

pub struct ButtonMonitor<P> {
    keycode: Keycode,
    pin: P,
    state: ButtonState,
    last_change_ms: Option<u64>,
}

impl<P> ButtonMonitor<P> {
    pub fn new(keycode: Keycode, pin: P) -> Self {
        Self {
            keycode,
            pin,
            state: ButtonState::Released,
            last_change_ms: None,
        }
    }

    pub fn keycode(&self) -> Keycode {
        self.keycode
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    pub fn last_change_ms(&self) -> Option<u64> {
        self.last_change_ms
    }

    /// Entprellte Zustandsmaschine ohne Seiteneffekte
    ///
    /// Gibt das auszulösende HID-Ereignis zurück, oder `None` wenn der
    /// Zustand gleich bleibt bzw. die letzte akzeptierte Flanke höchstens
    /// `DEBOUNCE_MS` zurückliegt.
    pub fn transition(&mut self, pressed: bool, now_ms: u64) -> Option<KeyEvent> {
        let new_state = ButtonState::from(pressed);
        if new_state == self.state {
            return None;
        }

        if let Some(last) = self.last_change_ms
            && now_ms.saturating_sub(last) <= DEBOUNCE_MS
        {
            return None;
        }

        self.last_change_ms = Some(now_ms);
        self.state = new_state;

        Some(match new_state {
            ButtonState::Pressed => KeyEvent::Down(self.keycode),
            ButtonState::Released => KeyEvent::Up(self.keycode),
        })
    }

    /// Übernimmt einen neuen (rohen) Zustand und löst die HID-Events aus
    ///
    /// Beim Drücken: Key-Down, danach optisches Feedback.
    /// Beim Loslassen: Key-Up.
    pub async fn press<C: PressContext>(&mut self, pressed: bool, ctx: &mut C) -> Option<KeyEvent> {
        let event = self.transition(pressed, ctx.now_ms())?;
        debug!("Button {}: {}", self.keycode, event);

        match event {
            KeyEvent::Down(keycode) => {
                ctx.key_down(keycode).await;
                ctx.visual_feedback().await;
            }
            KeyEvent::Up(keycode) => ctx.key_up(keycode).await,
        }

        Some(event)
    }
}

impl<P: InputPin> ButtonMonitor<P> {
    /// Liest den Pin (active-low)
    ///
    /// Bei einem Lesefehler bleibt der entprellte Zustand erhalten.
    pub fn read_pressed(&mut self) -> bool {
        match self.pin.is_low() {
            Ok(pressed) => pressed,
            Err(_e) => {
                error!("Failed to read button pin for {}", self.keycode);
                self.state.is_pressed()
            }
        }
    }

    /// Ein Poll-Durchlauf: Pin lesen und an [`ButtonMonitor::press`] geben
    pub async fn update<C: PressContext>(&mut self, ctx: &mut C) -> Option<KeyEvent> {
        let pressed = self.read_pressed();
        self.press(pressed, ctx).await
    }
}
