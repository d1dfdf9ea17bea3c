//=========================================================================
// Tick Scheduler
//=========================================================================
//
// Turns a variable-rate frame callback into fixed-size simulation ticks.
//
// Per frame:
// ```text
//  on_frame(now)
//    ├─ first call: cur = next = now
//    ├─ while now > next && loop < skip
//    │    ├─ !lock → dispatch_input → advance_simulation → end_frame
//    │    ├─ tick took longer than `fixed` → lock
//    │    └─ next += ticks, loop += 1
//    └─ blend = (now + ticks - next) * invt
//         └─ 0 <= blend <= 1 → interpolate(1.0, blend)
// ```
//
// The `skip` bound caps catch-up work after a stall (debugger, OS suspend,
// long asset load): time slips instead of the application freezing.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::clock::Clock;
use super::state::{TickRate, TickState};

//=== Constants ===========================================================

/// Converts clock milliseconds to seconds.
const TIME_SCALE: f32 = 0.001;

/// Motion rate handed to the interpolation hook.
const MOTION_RATE: f32 = 1.0;

//=== TickHooks ===========================================================

/// Collaborators driven by the scheduler.
///
/// For every executed tick the scheduler calls, in order,
/// [`dispatch_input`](Self::dispatch_input),
/// [`advance_simulation`](Self::advance_simulation) and
/// [`end_frame`](Self::end_frame). [`interpolate`](Self::interpolate) is
/// called at most once per frame, after all ticks.
pub trait TickHooks {
    /// Delivers input queued since the previous tick.
    fn dispatch_input(&mut self);

    /// Advances simulation state by one fixed step of `fixed_dt` seconds.
    fn advance_simulation(&mut self, fixed_dt: f32);

    /// Clears per-tick transient state.
    fn end_frame(&mut self);

    /// Interpolates rendered transforms between the last two ticks.
    /// `blend` is always within `[0, 1]`.
    fn interpolate(&mut self, _rate: f32, _blend: f32) {}
}

//=== TickScheduler =======================================================

/// Fixed-timestep scheduler over a monotonic [`Clock`].
///
/// Single-threaded: all hooks run synchronously inside
/// [`on_frame`](Self::on_frame).
#[derive(Debug)]
pub struct TickScheduler<C: Clock> {
    clock: C,
    state: TickState,
    total_ticks: u64,
}

impl<C: Clock> TickScheduler<C> {
    //--- Construction -----------------------------------------------------

    pub fn new(rate: TickRate, clock: C) -> Self {
        Self {
            clock,
            state: TickState::new(rate),
            total_ticks: 0,
        }
    }

    /// Replaces the tick rate and restarts scheduling from scratch.
    pub fn configure(&mut self, rate: TickRate) {
        self.state = TickState::new(rate);
        debug!(
            target: "tick",
            "Tick rate {} Hz ({} ms/tick, skip {})",
            self.state.rate, self.state.ticks, self.state.skip
        );
    }

    //--- Frame Processing -------------------------------------------------

    /// Runs one frame at the clock's current time. Returns the blend factor.
    pub fn on_frame<H: TickHooks>(&mut self, hooks: &mut H) -> f32 {
        let now = self.clock.now_millis();
        self.advance_to(now, hooks)
    }

    /// Runs one frame at an explicit time reading `now` (milliseconds).
    ///
    /// The clock is still consulted around each tick to detect overruns.
    pub fn advance_to<H: TickHooks>(&mut self, now: u64, hooks: &mut H) -> f32 {
        let state = &mut self.state;
        state.loop_count = 0;
        state.lock = false;

        if !state.init {
            state.init = true;
            state.next = now;
            trace!(target: "tick", "Time base established at {} ms", now);
        }
        state.cur = now;

        while now > state.next && state.loop_count < state.skip {
            if !state.lock {
                let started = self.clock.now_millis();

                hooks.dispatch_input();
                hooks.advance_simulation(state.fixed);
                hooks.end_frame();
                self.total_ticks += 1;

                let elapsed = self.clock.now_millis().saturating_sub(started);
                if elapsed as f32 * TIME_SCALE > state.fixed {
                    trace!(target: "tick", "Tick overran its slot ({} ms), locking", elapsed);
                    state.lock = true;
                }
            }

            state.next += state.ticks;
            state.loop_count += 1;
        }

        if state.loop_count == state.skip && now > state.next {
            debug!(
                target: "tick",
                "Catch-up bound reached ({} ticks), dropping {} ms",
                state.skip,
                now - state.next
            );
        }

        let behind = now as i64 + state.ticks as i64 - state.next as i64;
        state.blend = behind as f32 * state.invt;

        if (0.0..=1.0).contains(&state.blend) {
            hooks.interpolate(MOTION_RATE, state.blend);
        }

        state.blend
    }

    //--- Pacing -----------------------------------------------------------

    /// Milliseconds a caller may idle at `now` before the next tick is due.
    ///
    /// A tick runs once the clock is strictly past `next`, so the wait ends
    /// one millisecond after it. Never longer than one tick; zero before the
    /// time base exists or while behind.
    pub fn millis_until_next(&self, now: u64) -> u64 {
        if !self.state.init {
            return 0;
        }
        (self.state.next + 1).saturating_sub(now).min(self.state.ticks)
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> &TickState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Ticks actually executed since construction.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
