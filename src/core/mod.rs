//=========================================================================
// Core
//
// Platform-independent engine systems.
//
// - `tick`       fixed-timestep scheduler and time sources
// - `input`      input events and per-tick input state
// - `scene`      the simulation contract driven by the engine
// - `window`     the window/input backend contract
// - `services`   subsystems with a start/stop lifecycle
// - `config`     user definitions loaded from TOML
// - `resources`  resource-location manifest
//
//=========================================================================

pub mod config;
pub mod input;
pub mod resources;
pub mod scene;
pub mod services;
pub mod tick;
pub mod window;
