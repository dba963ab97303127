// Zeitquelle auf Basis von embassy-time

use embassy_time::Instant;
use macroboard_core::Clock;

/// Millisekunden seit Start des Embassy Time-Drivers
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
