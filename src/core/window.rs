//=========================================================================
// Window System
//=========================================================================
//
// Contract for the OS window and input backend driven by the engine loop.
//
// Call order within one engine frame:
// ```text
//   process_events(timeout)   pump OS events, buffer input; may idle
//                             up to `timeout` waiting for events
//   ┌ per tick ─────────────┐
//   │ dispatch_events()     │ buffered input → InputState
//   │ (scene update)        │
//   │ end_frame()           │ clear per-tick deltas
//   └───────────────────────┘
//   exit_requested()?         stop the loop
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::input::InputState;

//=== WindowSystem ========================================================

/// Window and input backend.
///
/// Implemented by the winit platform layer; tests provide in-memory fakes.
pub trait WindowSystem {
    /// Pumps pending OS events, waiting at most `timeout` for the first one.
    ///
    /// The engine passes the time left until the next tick is due, so an
    /// idle loop sleeps instead of spinning. `Duration::ZERO` never blocks.
    fn process_events(&mut self, timeout: Duration);

    /// Clears a previous exit request so the window can be run again.
    fn clear_exit(&mut self);

    /// Applies input buffered since the previous tick.
    fn dispatch_events(&mut self);

    /// Input state as of the last `dispatch_events`.
    fn input(&self) -> &InputState;

    /// Clears per-tick input deltas.
    fn end_frame(&mut self);

    /// Asks the run loop to stop after the current frame.
    fn request_exit(&mut self);

    fn exit_requested(&self) -> bool;
}
