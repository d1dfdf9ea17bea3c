//=========================================================================
// Tick State
//=========================================================================
//
// Tick rate configuration and the mutable accumulator state owned by the
// scheduler.
//
// Derivation (all from `rate`):
//   ticks = 1000 / rate        (whole milliseconds per tick)
//   skip  = max(rate / 5, 1)   (catch-up bound, ~0.2s of simulated time)
//   fixed = 1 / rate           (seconds per tick)
//   invt  = 1 / ticks          (blend normalisation)
//
//=========================================================================

//=== TickRate ============================================================

/// Simulation frequency in ticks per second, always within
/// [`TickRate::MIN`, `TickRate::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickRate(u32);

impl TickRate {
    pub const MIN: u32 = 25;
    pub const MAX: u32 = 90;
    pub const DEFAULT: TickRate = TickRate(60);

    /// Clamps `rate` into the supported range.
    pub fn new(rate: u32) -> Self {
        Self(rate.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for TickRate {
    fn from(rate: u32) -> Self {
        Self::new(rate)
    }
}

//=== TickState ===========================================================

/// Scheduler bookkeeping for one run.
///
/// Replaced wholesale whenever scheduling restarts. `cur`/`next` are
/// meaningless until the first frame establishes the time base.
#[derive(Debug, Clone, PartialEq)]
pub struct TickState {
    pub(super) rate: u32,
    pub(super) ticks: u64,
    pub(super) skip: u32,
    pub(super) fixed: f32,
    pub(super) invt: f32,

    pub(super) cur: u64,
    pub(super) next: u64,
    pub(super) loop_count: u32,
    pub(super) lock: bool,
    pub(super) blend: f32,
    pub(super) init: bool,
}

impl TickState {
    pub fn new(rate: TickRate) -> Self {
        let rate = rate.get();
        let ticks = u64::from(1000 / rate);

        Self {
            rate,
            ticks,
            skip: (rate / 5).max(1),
            fixed: 1.0 / rate as f32,
            invt: 1.0 / ticks as f32,
            cur: 0,
            next: 0,
            loop_count: 0,
            lock: false,
            blend: 0.0,
            init: false,
        }
    }

    //--- Derived Configuration --------------------------------------------

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Milliseconds per tick.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Maximum ticks stepped in a single frame.
    pub fn skip(&self) -> u32 {
        self.skip
    }

    /// Seconds per tick.
    pub fn fixed(&self) -> f32 {
        self.fixed
    }

    pub fn invt(&self) -> f32 {
        self.invt
    }

    //--- Per-Frame State --------------------------------------------------

    pub fn cur(&self) -> u64 {
        self.cur
    }

    /// Next scheduled tick boundary.
    pub fn next(&self) -> u64 {
        self.next
    }

    /// Ticks stepped during the most recent frame (including locked ones).
    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    /// Whether a tick overran its slot during the most recent frame.
    pub fn locked(&self) -> bool {
        self.lock
    }

    pub fn blend(&self) -> f32 {
        self.blend
    }

    pub fn is_initialized(&self) -> bool {
        self.init
    }
}

impl Default for TickState {
    fn default() -> Self {
        Self::new(TickRate::DEFAULT)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
