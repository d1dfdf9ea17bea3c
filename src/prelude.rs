//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use momokit::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError, FrameEvent, RunSummary};

// Configuration
pub use crate::core::config::UserDefs;

// Input
pub use crate::core::input::{InputState, KeyCode, Modifiers, MouseButton};

// Scene and window contracts
pub use crate::core::scene::{Scene, SceneControl, Tick};
pub use crate::core::services::Service;
pub use crate::core::window::WindowSystem;
