//=========================================================================
// Clock
//=========================================================================
//
// Monotonic millisecond time sources for the tick scheduler.
//
// Architecture:
//   Clock (trait) ─┬─ MonotonicClock  (std::time::Instant, production)
//                  └─ ManualClock     (shared counter, deterministic tests)
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

//=== Clock ===============================================================

/// Source of monotonic wall time in whole milliseconds.
///
/// Readings must never decrease. The origin is arbitrary; only differences
/// between readings are meaningful to the scheduler.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

//=== MonotonicClock ======================================================

/// Real-time clock measuring milliseconds since its construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    /// Restarts the time base at zero.
    pub fn reset(&mut self) {
        self.origin = Instant::now();
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

//=== ManualClock =========================================================

/// Hand-driven clock for replays and tests.
///
/// Clones share the same counter, so a test can hold one handle while the
/// scheduler (or a tick hook) owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self { now: Rc::new(Cell::new(start_millis)) }
    }

    /// Moves time to `millis`. Earlier values are ignored to keep the
    /// clock monotonic.
    pub fn set(&self, millis: u64) {
        if millis > self.now.get() {
            self.now.set(millis);
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
