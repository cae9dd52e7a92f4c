//! Platform abstraction layer
//!
//! The simulation only sees one [`TickInput`] per frame. Where the clock
//! and the pointer come from is decided here.

use std::cell::Cell;
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::sim::TickInput;

/// Source of frame timestamps
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to (headless runs, tests)
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Pointer state, valid for the current frame only
pub trait InputSource {
    fn cursor_position(&self) -> Vec2;
    fn is_primary_down(&self) -> bool;
}

/// Fixed pointer state, set by whoever drives the session
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedInput {
    pub cursor: Vec2,
    pub primary_down: bool,
}

impl ScriptedInput {
    /// Pointer at `cursor`, button pressed
    pub fn click(cursor: Vec2) -> Self {
        Self {
            cursor,
            primary_down: true,
        }
    }

    /// Pointer at `cursor`, button released
    pub fn hover(cursor: Vec2) -> Self {
        Self {
            cursor,
            primary_down: false,
        }
    }
}

impl InputSource for ScriptedInput {
    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    fn is_primary_down(&self) -> bool {
        self.primary_down
    }
}

/// Snapshot pointer and clock for one tick
pub fn capture(input: &impl InputSource, clock: &impl Clock) -> TickInput {
    TickInput {
        cursor: input.cursor_position(),
        primary_down: input.is_primary_down(),
        now: clock.now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_snapshot() {
        let start = Instant::now();
        let clock = ManualClock::new(start);
        clock.advance(Duration::from_millis(250));

        let input = capture(&ScriptedInput::click(Vec2::new(10.0, 20.0)), &clock);
        assert_eq!(input.cursor, Vec2::new(10.0, 20.0));
        assert!(input.primary_down);
        assert_eq!(input.now, start + Duration::from_millis(250));

        let input = capture(&ScriptedInput::hover(Vec2::ONE), &clock);
        assert!(!input.primary_down);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let before = Instant::now();
        let first = capture(&ScriptedInput::default(), &clock);
        let second = capture(&ScriptedInput::default(), &clock);
        assert!(first.now >= before);
        assert!(second.now >= first.now);
    }
}
