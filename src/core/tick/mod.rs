//=========================================================================
// Tick Subsystem
//=========================================================================
//
// Fixed-timestep scheduling: decouples the simulation rate from the
// display refresh rate and exposes a blend factor for interpolated
// rendering.
//
// Components:
// - `clock`: monotonic millisecond time sources
// - `state`: tick rate and accumulator bookkeeping
// - `scheduler`: per-frame algorithm and the hooks it drives
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod scheduler;
mod state;

//=== Public API ==========================================================

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use scheduler::{TickHooks, TickScheduler};
pub use state::{TickRate, TickState};
