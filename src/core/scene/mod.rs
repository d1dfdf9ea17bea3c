//=========================================================================
// Scene
//=========================================================================
//
// Contract between the engine loop and the active scene.
//
// Flow (per frame):
//   tick × N → Scene::update(&Tick)
//   once     → Scene::synchronize_motion(rate, blend)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputState;

//=== SceneControl ========================================================

/// Directive returned from [`Scene::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneControl {
    Continue,
    /// Ask the window system to stop the run loop after this frame.
    Exit,
}

//=== Tick ================================================================

/// Data handed to a scene for one fixed simulation step.
#[derive(Debug, Clone, Copy)]
pub struct Tick<'a> {
    /// Step length in seconds.
    pub dt: f32,

    /// Configured fixed step in seconds; equal to `dt` for engine ticks.
    pub fixed_dt: f32,

    /// Whether rendering interpolates between ticks.
    pub smooth: bool,

    /// Input state after this tick's events were dispatched.
    pub input: &'a InputState,
}

//=== Scene Trait =========================================================

/// The simulation driven by the engine.
///
/// # Minimal Implementation
///
/// ```rust
/// use momokit::prelude::*;
///
/// struct Spinner { angle: f32 }
///
/// impl Scene for Spinner {
///     fn update(&mut self, tick: &Tick<'_>) -> SceneControl {
///         self.angle += 90.0 * tick.dt;
///         if tick.input.is_key_pressed(KeyCode::Escape) {
///             return SceneControl::Exit;
///         }
///         SceneControl::Continue
///     }
/// }
/// ```
pub trait Scene {
    /// Advances the scene by one fixed step.
    fn update(&mut self, tick: &Tick<'_>) -> SceneControl;

    /// Places rendered objects `blend` of the way from the previous tick's
    /// state to the current one. `blend` is within `[0, 1]`.
    fn synchronize_motion(&mut self, _rate: f32, _blend: f32) {}
}

//=========================================================================
// Unit Tests
//=========================================================================
