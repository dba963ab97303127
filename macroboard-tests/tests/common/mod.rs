//! Mocks für alle Hardware-Traits
//!
//! Werden von allen Integrationstests geteilt. Zustand, den ein Test
//! nach dem Verschieben in den Controller noch prüfen will, liegt in
//! `Rc<Cell<_>>` bzw. `Rc<RefCell<_>>`.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use macroboard_core::{
    Clock, HidError, KeyEvent, KeyReporter, KeySet, Keycode, LedError, LightController,
    LightSettings, SmartLedWriter,
};
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub frames: Vec<Vec<RGB8>>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn last_color(&self) -> Option<RGB8> {
        self.last_frame().and_then(|frame| frame.first().copied())
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.frames.push(pixels.to_vec());
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Clock + Delay
// ============================================================================

#[derive(Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Zeichnet alle Delays auf; optional läuft eine MockClock mit
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
    clock: Option<MockClock>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: MockClock) -> Self {
        Self {
            delays_ms: Vec::new(),
            clock: Some(clock),
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.delays_ms.iter().map(|&ms| u64::from(ms)).sum()
    }

    fn record(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        if let Some(clock) = &self.clock {
            clock.advance(u64::from(ms));
        }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Taster mit Pull-Up: `high` = losgelassen, `low` = gedrückt
#[derive(Clone)]
pub struct MockButtonPin {
    high: Rc<Cell<bool>>,
    fail: Rc<Cell<bool>>,
}

impl MockButtonPin {
    pub fn new() -> Self {
        Self {
            high: Rc::new(Cell::new(true)),
            fail: Rc::new(Cell::new(false)),
        }
    }

    pub fn push(&self) {
        self.high.set(false);
    }

    pub fn let_go(&self) {
        self.high.set(true);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl ErrorType for MockButtonPin {
    type Error = MockPinError;
}

impl InputPin for MockButtonPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail.get() {
            return Err(MockPinError);
        }
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Ausgangs-Pin, der alle Pegel aufzeichnet (`true` = high)
#[derive(Clone, Default)]
pub struct MockOutputPin {
    pub levels: Rc<RefCell<Vec<bool>>>,
}

impl MockOutputPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<bool> {
        self.levels.borrow().clone()
    }
}

impl ErrorType for MockOutputPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.borrow_mut().push(true);
        Ok(())
    }
}

// ============================================================================
// Mock Key Reporter
// ============================================================================

#[derive(Clone, Default)]
pub struct MockKeyReporter {
    pub events: Rc<RefCell<Vec<KeyEvent>>>,
    pub keys: Rc<RefCell<KeySet>>,
    pub fail: Rc<Cell<bool>>,
}

impl MockKeyReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<KeyEvent> {
        self.events.borrow().clone()
    }
}

impl KeyReporter for MockKeyReporter {
    async fn press(&mut self, keycode: Keycode) -> Result<(), HidError> {
        if self.fail.get() {
            return Err(HidError::Disabled);
        }
        self.keys.borrow_mut().press(keycode);
        self.events.borrow_mut().push(KeyEvent::Down(keycode));
        Ok(())
    }

    async fn release(&mut self, keycode: Keycode) -> Result<(), HidError> {
        if self.fail.get() {
            return Err(HidError::Disabled);
        }
        self.keys.borrow_mut().release(keycode);
        self.events.borrow_mut().push(KeyEvent::Up(keycode));
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestLight<const N: usize> = LightController<MockLedWriter, MockDelay, N>;

pub fn light<const N: usize>(settings: LightSettings) -> TestLight<N> {
    LightController::new(MockLedWriter::new(), MockDelay::new(), settings)
}

pub fn red_settings(brightness: u8) -> LightSettings {
    LightSettings {
        brightness,
        base_color: RGB8 { r: 255, g: 0, b: 0 },
    }
}
