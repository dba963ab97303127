//! Integration Tests für ButtonMonitor (Entprellung + HID-Events)

mod common;

use common::{MockButtonPin, MockClock};
use embassy_futures::block_on;
use macroboard_core::{ButtonMonitor, ButtonState, DEBOUNCE_MS, KeyEvent, Keycode, PressContext};

/// Zeichnet alle Seiteneffekte in Aufruf-Reihenfolge auf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Down(Keycode),
    Up(Keycode),
    Feedback,
}

struct Recorder {
    clock: MockClock,
    effects: Vec<Effect>,
}

impl Recorder {
    fn new(clock: MockClock) -> Self {
        Self {
            clock,
            effects: Vec::new(),
        }
    }
}

impl PressContext for Recorder {
    fn now_ms(&self) -> u64 {
        use macroboard_core::Clock;
        self.clock.now_ms()
    }

    async fn key_down(&mut self, keycode: Keycode) {
        self.effects.push(Effect::Down(keycode));
    }

    async fn key_up(&mut self, keycode: Keycode) {
        self.effects.push(Effect::Up(keycode));
    }

    async fn visual_feedback(&mut self) {
        self.effects.push(Effect::Feedback);
    }
}

fn setup(keycode: Keycode) -> (ButtonMonitor<MockButtonPin>, MockButtonPin, MockClock, Recorder) {
    let pin = MockButtonPin::new();
    let clock = MockClock::new();
    let button = ButtonMonitor::new(keycode, pin.clone());
    let recorder = Recorder::new(clock.clone());
    (button, pin, clock, recorder)
}

// ============================================================================
// Tests: update()
// ============================================================================

#[test]
fn test_initial_state_is_released() {
    let (mut button, _pin, _clock, mut ctx) = setup(Keycode::F13);
    assert_eq!(button.state(), ButtonState::Released);

    // Pull-Up: losgelassen liest high → kein Event
    assert_eq!(block_on(button.update(&mut ctx)), None);
    assert!(ctx.effects.is_empty());
}

#[test]
fn test_press_release_scenario() {
    let (mut button, pin, clock, mut ctx) = setup(Keycode::F15);

    clock.set(0);
    pin.push();
    assert_eq!(
        block_on(button.update(&mut ctx)),
        Some(KeyEvent::Down(Keycode::F15))
    );
    assert_eq!(button.state(), ButtonState::Pressed);

    clock.set(10);
    pin.let_go();
    assert_eq!(block_on(button.update(&mut ctx)), None);
    assert_eq!(button.state(), ButtonState::Pressed);

    clock.set(60);
    assert_eq!(
        block_on(button.update(&mut ctx)),
        Some(KeyEvent::Up(Keycode::F15))
    );
    assert_eq!(button.state(), ButtonState::Released);

    assert_eq!(
        ctx.effects,
        vec![
            Effect::Down(Keycode::F15),
            Effect::Feedback,
            Effect::Up(Keycode::F15),
        ]
    );
}

#[test]
fn test_held_press_emits_exactly_one_key_down() {
    let (mut button, pin, clock, mut ctx) = setup(Keycode::F13);

    pin.push();
    for t in 0..(DEBOUNCE_MS * 4) {
        clock.set(t);
        block_on(button.update(&mut ctx));
    }

    assert_eq!(
        ctx.effects,
        vec![Effect::Down(Keycode::F13), Effect::Feedback]
    );
    assert!(button.is_pressed());
}

#[test]
fn test_two_edges_within_window_accept_one() {
    let (mut button, pin, clock, mut ctx) = setup(Keycode::F14);

    clock.set(500);
    pin.push();
    block_on(button.update(&mut ctx));

    // Prellen: kurz los, wieder gedrückt - alles innerhalb des Fensters
    clock.set(520);
    pin.let_go();
    block_on(button.update(&mut ctx));
    clock.set(530);
    pin.push();
    block_on(button.update(&mut ctx));

    assert_eq!(
        ctx.effects,
        vec![Effect::Down(Keycode::F14), Effect::Feedback]
    );
}

#[test]
fn test_release_exactly_at_window_is_ignored() {
    let (mut button, pin, clock, mut ctx) = setup(Keycode::F13);

    pin.push();
    block_on(button.update(&mut ctx));

    pin.let_go();
    clock.set(DEBOUNCE_MS);
    assert_eq!(block_on(button.update(&mut ctx)), None);
    clock.set(DEBOUNCE_MS + 1);
    assert_eq!(
        block_on(button.update(&mut ctx)),
        Some(KeyEvent::Up(Keycode::F13))
    );
}

#[test]
fn test_release_emits_no_feedback() {
    let (mut button, pin, clock, mut ctx) = setup(Keycode::F16);

    pin.push();
    block_on(button.update(&mut ctx));
    ctx.effects.clear();

    clock.set(100);
    pin.let_go();
    block_on(button.update(&mut ctx));
    assert_eq!(ctx.effects, vec![Effect::Up(Keycode::F16)]);
}

#[test]
fn test_read_error_keeps_debounced_state() {
    let (mut button, pin, clock, mut ctx) = setup(Keycode::F17);

    pin.push();
    block_on(button.update(&mut ctx));

    clock.set(1000);
    pin.let_go();
    pin.fail_reads(true);
    assert_eq!(block_on(button.update(&mut ctx)), None);
    assert!(button.is_pressed());

    pin.fail_reads(false);
    assert_eq!(
        block_on(button.update(&mut ctx)),
        Some(KeyEvent::Up(Keycode::F17))
    );
}

// ============================================================================
// Tests: press()
// ============================================================================

#[test]
fn test_press_bypasses_pin() {
    let (mut button, _pin, clock, mut ctx) = setup(Keycode::F18);

    clock.set(5);
    assert_eq!(
        block_on(button.press(true, &mut ctx)),
        Some(KeyEvent::Down(Keycode::F18))
    );
    assert_eq!(button.last_change_ms(), Some(5));
    assert_eq!(block_on(button.press(true, &mut ctx)), None);
}
