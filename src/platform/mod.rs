//=========================================================================
// Platform Subsystem
//
// Winit-backed implementation of the engine's `WindowSystem`.
//
// Architecture:
// ```text
//  Engine run loop (main thread)
//  ┌─────────────────────────────────────────────────────────┐
//  │ process_events(timeout)                                 │
//  │   pump_app_events(Some(timeout))                        │
//  │     ├─ resumed        → create window from WindowDefs   │
//  │     ├─ input events   → InputProcessor → InputBuffer    │
//  │     ├─ CloseRequested → drop window, exit flag          │
//  │     └─ about_to_wait  → recreate window after clear_exit│
//  │                                                         │
//  │ per tick:                                               │
//  │   dispatch_events()   InputBuffer::drain → InputState   │
//  │   end_frame()         InputState::end_tick              │
//  └─────────────────────────────────────────────────────────┘
// ```
//
// The engine owns the outer loop, so events are pumped with a bounded wait
// instead of handing control to `run_app`. One `WinitWindowSystem` lives
// for the whole process; winit allows a single event loop.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Crates =====================================================

use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton as WinitMouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{ModifiersState, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::config::WindowDefs;
use crate::core::input::InputState;
use crate::core::window::WindowSystem;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Platform initialization errors. Fatal: without an event loop the
/// engine cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[from] winit::error::EventLoopError),
}

//=== PlatformInput =======================================================

/// Conversion, buffering and per-tick state for OS input.
struct PlatformInput {
    processor: InputProcessor,
    buffer: InputBuffer,
    state: InputState,
}

impl PlatformInput {
    fn new() -> Self {
        Self {
            processor: InputProcessor::new(),
            buffer: InputBuffer::new(),
            state: InputState::new(),
        }
    }

    //--- OS Side ----------------------------------------------------------

    fn on_modifiers(&mut self, modifiers: ModifiersState) {
        trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
        self.processor.update_modifiers(modifiers);
    }

    fn on_key(&mut self, physical: PhysicalKey, state: ElementState, repeat: bool) {
        if repeat {
            return;
        }
        match self.processor.process_key(physical, state) {
            Some(event) => self.buffer.push(event),
            None => trace!(target: "platform::input", "Unmapped key ignored: {:?}", physical),
        }
    }

    fn on_mouse_button(&mut self, button: WinitMouseButton, state: ElementState) {
        let event = self.processor.process_mouse_button(button, state);
        self.buffer.push(event);
    }

    fn on_cursor(&mut self, x: f32, y: f32) {
        let event = self.processor.process_mouse_move(x, y);
        self.buffer.push(event);
    }

    //--- Tick Side --------------------------------------------------------

    fn dispatch(&mut self) {
        if self.buffer.is_empty() {
            self.state.finalize();
            return;
        }

        let events = self.buffer.drain();
        trace!(target: "platform::input", "Dispatching {} events", events.len());
        self.state.apply_events(&events);
        self.state.finalize();
    }

    fn end_tick(&mut self) {
        self.state.end_tick();
    }
}

//=== PlatformApp =========================================================

/// Winit application handler; lives inside `WinitWindowSystem`.
struct PlatformApp {
    defs: WindowDefs,
    window: Option<Window>,
    input: PlatformInput,
    /// Set once winit delivered `resumed`; windows may only be created after.
    resumed: bool,
    exit: bool,
}

impl PlatformApp {
    fn window_attributes(&self) -> WindowAttributes {
        let fullscreen = self.defs.fullscreen.then(|| Fullscreen::Borderless(None));

        WindowAttributes::default()
            .with_title(self.defs.title.clone())
            .with_inner_size(LogicalSize::new(self.defs.width, self.defs.height))
            .with_fullscreen(fullscreen)
    }

    /// A closed window is recreated when the app is run again.
    fn needs_window(&self) -> bool {
        self.resumed && self.window.is_none() && !self.exit
    }

    /// Clears the exit flag and input left over from the previous run.
    fn rearm(&mut self) {
        self.exit = false;
        self.input = PlatformInput::new();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) {
        match event_loop.create_window(self.window_attributes()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: \"{}\" {}x{} @ {}x DPI",
                    self.defs.title,
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.exit = true;
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for PlatformApp {
    /// Creates the window on first resume. Mobile platforms may resume
    /// several times.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.resumed = true;
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }
        self.create_window(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.needs_window() {
            debug!(target: "platform", "Reopening window for a new run");
            self.create_window(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.window = None;
                self.exit = true;
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(modifiers) => self.input.on_modifiers(modifiers.state()),

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.input.on_key(key_event.physical_key, key_event.state, key_event.repeat);
            }

            WindowEvent::MouseInput { state, button, .. } => self.input.on_mouse_button(button, state),

            WindowEvent::CursorMoved { position, .. } => {
                self.input.on_cursor(position.x as f32, position.y as f32);
            }

            _ => {}
        }
    }
}

//=== WinitWindowSystem ===================================================

/// OS window and input backend on winit.
///
/// Must be created and driven on the main thread (winit requirement on
/// macOS/iOS). Only one can exist per process; keep it and rerun it with
/// [`WindowSystem::clear_exit`] rather than creating another.
pub struct WinitWindowSystem {
    event_loop: EventLoop<()>,
    app: PlatformApp,
}

impl WinitWindowSystem {
    /// Creates the event loop. The window itself appears on the first
    /// `process_events` call.
    pub fn new(defs: &WindowDefs) -> Result<Self, PlatformError> {
        let event_loop = EventLoop::new()?;
        info!(target: "platform", "Platform subsystem initialized");

        Ok(Self {
            event_loop,
            app: PlatformApp {
                defs: defs.clone(),
                window: None,
                input: PlatformInput::new(),
                resumed: false,
                exit: false,
            },
        })
    }

    pub fn window(&self) -> Option<&Window> {
        self.app.window.as_ref()
    }
}

impl WindowSystem for WinitWindowSystem {
    fn process_events(&mut self, timeout: Duration) {
        let status = self.event_loop.pump_app_events(Some(timeout), &mut self.app);

        if let PumpStatus::Exit(code) = status {
            debug!(target: "platform", "Event loop exited with code {}", code);
            self.app.exit = true;
        }
    }

    fn dispatch_events(&mut self) {
        self.app.input.dispatch();
    }

    fn input(&self) -> &InputState {
        &self.app.input.state
    }

    fn end_frame(&mut self) {
        self.app.input.end_tick();
    }

    fn clear_exit(&mut self) {
        self.app.rearm();
    }

    fn request_exit(&mut self) {
        self.app.exit = true;
    }

    fn exit_requested(&self) -> bool {
        self.app.exit
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
