//! Fixed-rate frame pacing
//!
//! The whole game advances in fixed 1/60 s ticks: poll input, advance one
//! tick, redraw, then sleep out the rest of the frame slot.

use std::time::{Duration, Instant};

/// Simulation rate. One tick advances the game by exactly 1/60 s.
pub const TICKS_PER_SECOND: u32 = 60;

/// Sleep-based scheduler that holds the game loop at 60 ticks per second.
///
/// A frame that ran long gets no sleep; the next tick starts immediately
/// rather than trying to catch up.
pub struct FrameClock {
    frame_start: Instant,
    frame_slot: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock {
            frame_start: Instant::now(),
            frame_slot: Duration::new(0, 1_000_000_000u32 / TICKS_PER_SECOND),
        }
    }

    /// Sleeps until the current frame slot is used up, then starts the next.
    pub fn wait_for_next_tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_slot {
            std::thread::sleep(self.frame_slot - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_frame_does_not_block() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(20));
        let before = Instant::now();
        clock.wait_for_next_tick();
        // The slot was already spent, so this should return almost at once
        assert!(before.elapsed() < Duration::from_millis(10));
    }
}
