//=========================================================================
// momokit - Library Root
//
// A small game engine core built around a fixed-timestep tick scheduler.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the scheduler and collaborator contracts (`core`)
// - Provide a winit window system (`platform`)
//
// Typical usage:
// ```no_run
// use momokit::prelude::*;
//
// struct Idle;
// impl Scene for Idle {
//     fn update(&mut self, _tick: &Tick<'_>) -> SceneControl {
//         SceneControl::Continue
//     }
// }
//
// fn main() -> Result<(), EngineError> {
//     let mut engine = EngineBuilder::new().build();
//     engine.initialize()?;
//     engine.run_windowed(&mut Idle)?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent systems: tick scheduling, input,
// scene contract, configuration and services.
//
pub mod core;

//--- Engine & Support ----------------------------------------------------
//
// `engine` is the lifecycle owner and run loop; `platform` is the winit
// window system it drives by default; `logging` installs the log backend.
//
pub mod engine;
pub mod logging;
pub mod platform;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError, FrameEvent, RunSummary};
