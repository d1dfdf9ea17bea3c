//=========================================================================
// Input
//
// Platform-independent input types and per-tick input state.
//
// The platform layer produces `InputEvent`s; the window system applies
// them to an `InputState` at the start of each tick (`dispatch_events`)
// and clears per-tick deltas at the end (`end_frame`).
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod input_state;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use input_state::InputState;
