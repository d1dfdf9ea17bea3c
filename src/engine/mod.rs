//=========================================================================
// Engine
//
// Lifecycle owner and run loop.
//
// Architecture:
// ```text
//     EngineBuilder ──build()──> Engine ──initialize()──> [Ready]
//         │                        │
//         ├─ with_defs()           ├─ run(window, scene)
//         ├─ with_tick_rate()      │    clear_exit
//         └─ with_service()        │    do { process_events(wait); frame }
//                                  │    while !exit_requested
//                                  └─ finalize() (also on Drop)
//
//     wait = time until the next tick is due, at most one tick
//
//     frame = TickScheduler::advance_to(FrameEvent.now)
//               ├─ per tick: dispatch_events → Scene::update → end_frame
//               └─ once:     Scene::synchronize_motion(rate, blend)
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod error;
mod frame_stats;

//=== Standard Library Imports ============================================

use std::path::Path;
use std::time::Duration;

//=== External Dependencies ===============================================

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::UserDefs;
use crate::core::resources::{load_locations, ResourceLocation};
use crate::core::scene::{Scene, SceneControl, Tick};
use crate::core::services::{Service, ServiceRegistry};
use crate::core::tick::{Clock, MonotonicClock, TickHooks, TickRate, TickScheduler};
use crate::core::window::WindowSystem;
use crate::logging::{init_logging, LoggingConfig};
use crate::platform::WinitWindowSystem;
use frame_stats::FrameStats;

pub use error::EngineError;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// Everything comes from [`UserDefs::default`]: 60 ticks per second,
/// 25 fps animation, no resource manifest, no services.
///
/// # Examples
///
/// ```no_run
/// use momokit::prelude::*;
///
/// struct Idle;
/// impl Scene for Idle {
///     fn update(&mut self, _tick: &Tick<'_>) -> SceneControl {
///         SceneControl::Continue
///     }
/// }
///
/// # fn main() -> Result<(), EngineError> {
/// let mut engine = EngineBuilder::new().with_tick_rate(30).build();
/// engine.initialize()?;
/// engine.run_windowed(&mut Idle)?;
/// # Ok(())
/// # }
/// ```
pub struct EngineBuilder {
    defs: UserDefs,
    services: ServiceRegistry,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            defs: UserDefs::default(),
            services: ServiceRegistry::new(),
        }
    }

    /// Replaces all user definitions.
    pub fn with_defs(mut self, defs: UserDefs) -> Self {
        self.defs = defs;
        self
    }

    /// Loads user definitions from a TOML file.
    pub fn with_defs_file(self, path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let defs = UserDefs::load(path)?;
        Ok(self.with_defs(defs))
    }

    /// Sets the requested simulation rate. Values outside [25, 90] are
    /// clamped during [`Engine::initialize`].
    ///
    /// # Panics
    ///
    /// Panics if `rate == 0`.
    pub fn with_tick_rate(mut self, rate: u32) -> Self {
        assert!(rate > 0, "Tick rate must be positive, got {}", rate);
        self.defs.tick_rate = rate;
        self
    }

    /// Registers a service; services start in registration order.
    pub fn with_service<S: Service + 'static>(mut self, service: S) -> Self {
        self.services.register(Box::new(service));
        self
    }

    pub fn build(self) -> Engine {
        debug!(
            target: "engine",
            "Building engine (tick rate: {}, services: {})",
            self.defs.tick_rate,
            self.services.len()
        );

        Engine {
            rate: self.defs.clamped_tick_rate(),
            defs: self.defs,
            services: self.services,
            resources: Vec::new(),
            window: None,
            initialized: false,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== FrameEvent ==========================================================

/// Timing of one pass through the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEvent {
    /// Clock reading at the start of the frame, in milliseconds.
    pub now: u64,
    /// Milliseconds since the previous frame; zero on the first.
    pub since_last: u64,
}

impl FrameEvent {
    fn at(now: u64, previous: Option<u64>) -> Self {
        let since_last = previous.map_or(0, |prev| now.saturating_sub(prev));
        Self { now, since_last }
    }
}

//=== RunSummary ==========================================================

/// Counters from one call to [`Engine::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
}

//=== Engine ==============================================================

/// Engine runtime: owns configuration, services and resource locations,
/// and drives a scene through a [`WindowSystem`] at a fixed tick rate.
pub struct Engine {
    defs: UserDefs,
    rate: TickRate,
    services: ServiceRegistry,
    resources: Vec<ResourceLocation>,
    /// Created by the first `run_windowed` and kept for later runs.
    window: Option<WinitWindowSystem>,
    initialized: bool,
}

impl Engine {
    //--- Lifecycle --------------------------------------------------------

    /// Brings the engine up. Calling it again is a no-op.
    ///
    /// Order: logging, tick rate, resource locations, services. A missing
    /// or malformed resource manifest is logged and skipped; a service that
    /// fails to start is fatal and rolls back the ones already started.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.initialized {
            return Ok(());
        }

        if self.defs.log.enabled {
            init_logging(LoggingConfig::from(&self.defs.log));
        }

        self.rate = self.defs.clamped_tick_rate();
        if self.rate.get() != self.defs.tick_rate {
            warn!(
                target: "engine",
                "Tick rate {} out of range, using {}",
                self.defs.tick_rate,
                self.rate.get()
            );
        }

        info!(
            target: "engine",
            "Initializing engine (tick rate: {} Hz, animation: {} fps)",
            self.rate.get(),
            self.defs.anim_speed
        );

        self.load_resources();

        self.services
            .start_all()
            .map_err(|f| EngineError::ServiceStartup { service: f.service, source: f.source })?;

        self.initialized = true;
        info!(target: "engine", "Engine initialization complete");
        Ok(())
    }

    /// Stops services in reverse start order. Calling it again is a no-op.
    pub fn finalize(&mut self) {
        if !self.initialized {
            return;
        }

        info!(target: "engine", "Finalizing engine");
        self.services.stop_all();
        self.resources.clear();
        self.initialized = false;
    }

    fn load_resources(&mut self) {
        let Some(path) = self.defs.resources.as_deref() else {
            return;
        };

        match load_locations(path) {
            Ok(locations) => {
                info!(
                    target: "engine",
                    "Loaded {} resource locations from {}",
                    locations.len(),
                    path.display()
                );
                for location in &locations {
                    debug!(
                        target: "engine",
                        "  [{}] {} {}",
                        location.group,
                        location.kind,
                        location.path.display()
                    );
                }
                self.resources = locations;
            }
            Err(e) => warn!(target: "engine", "Resource locations not loaded: {}", e),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Simulation ticks per second after clamping.
    pub fn tick_rate(&self) -> u32 {
        self.rate.get()
    }

    /// Seconds per tick.
    pub fn step_rate(&self) -> f32 {
        1.0 / self.rate.get() as f32
    }

    /// Animation frames per second.
    pub fn anim_rate(&self) -> f32 {
        self.defs.anim_speed
    }

    pub fn defs(&self) -> &UserDefs {
        &self.defs
    }

    pub fn resources(&self) -> &[ResourceLocation] {
        &self.resources
    }

    //--- Execution --------------------------------------------------------

    /// Runs `scene` until the window system reports an exit request.
    pub fn run<W, S>(&mut self, window: &mut W, scene: &mut S) -> Result<RunSummary, EngineError>
    where
        W: WindowSystem,
        S: Scene,
    {
        self.run_with_clock(window, scene, MonotonicClock::new())
    }

    /// Runs `scene` in a winit window built from the configured window
    /// definitions.
    ///
    /// The window system is created on the first call and reused by later
    /// ones, since winit allows one event loop per process.
    pub fn run_windowed<S: Scene>(&mut self, scene: &mut S) -> Result<RunSummary, EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }

        let mut window = match self.window.take() {
            Some(window) => window,
            None => WinitWindowSystem::new(&self.defs.window)?,
        };
        let result = self.run(&mut window, scene);
        self.window = Some(window);
        result
    }

    /// [`run`](Self::run) with an explicit time source.
    ///
    /// Tick state is rebuilt on every call, so the first frame only
    /// establishes the time base. A previous exit request on `window` is
    /// cleared first.
    pub fn run_with_clock<W, S, C>(
        &mut self,
        window: &mut W,
        scene: &mut S,
        clock: C,
    ) -> Result<RunSummary, EngineError>
    where
        W: WindowSystem,
        S: Scene,
        C: Clock,
    {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }

        window.clear_exit();
        let mut scheduler = TickScheduler::new(self.rate, clock);
        let mut stats = FrameStats::new(self.defs.stats.period_ms);
        let mut summary = RunSummary::default();

        info!(target: "engine", "Entering run loop ({} Hz)", self.rate.get());

        let mut last_frame: Option<u64> = None;

        loop {
            let wait = scheduler.millis_until_next(scheduler.clock().now_millis());
            window.process_events(Duration::from_millis(wait));

            let frame = FrameEvent::at(scheduler.clock().now_millis(), last_frame);
            last_frame = Some(frame.now);
            trace!(target: "engine", "Frame at {} ms (+{} ms)", frame.now, frame.since_last);

            let ticks_before = scheduler.total_ticks();
            let blend = {
                let mut hooks = EngineTick { window: &mut *window, scene: &mut *scene };
                scheduler.advance_to(frame.now, &mut hooks)
            };
            let ticks = scheduler.total_ticks() - ticks_before;

            summary.frames += 1;
            summary.ticks += ticks;
            stats.record(frame.now, ticks, blend);

            if window.exit_requested() {
                break;
            }
        }

        info!(
            target: "engine",
            "Run loop exited after {} frames, {} ticks",
            summary.frames,
            summary.ticks
        );
        Ok(summary)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.finalize();
    }
}

//=== EngineTick ==========================================================

/// Routes scheduler callbacks to the window system and scene.
struct EngineTick<'a, W, S> {
    window: &'a mut W,
    scene: &'a mut S,
}

impl<W: WindowSystem, S: Scene> TickHooks for EngineTick<'_, W, S> {
    fn dispatch_input(&mut self) {
        self.window.dispatch_events();
    }

    fn advance_simulation(&mut self, fixed_dt: f32) {
        let tick = Tick {
            dt: fixed_dt,
            fixed_dt,
            smooth: true,
            input: self.window.input(),
        };

        if self.scene.update(&tick) == SceneControl::Exit {
            debug!(target: "engine", "Scene requested exit");
            self.window.request_exit();
        }
    }

    fn end_frame(&mut self) {
        self.window.end_frame();
    }

    fn interpolate(&mut self, rate: f32, blend: f32) {
        self.scene.synchronize_motion(rate, blend);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, InputState, KeyCode, Modifiers};
    use crate::core::services::ServiceError;
    use crate::core::tick::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    //=====================================================================
    // Test Doubles
    //=====================================================================

    /// Advances a shared clock by `step_ms` per pumped frame and requests
    /// exit once `exit_after` frames were pumped. Records each wait it was
    /// offered.
    struct FakeWindow {
        clock: ManualClock,
        step_ms: u64,
        exit_after: Option<u64>,
        pumped: u64,
        waits: Vec<Duration>,
        pending: Vec<InputEvent>,
        input: InputState,
        exit: bool,
        journal: Journal,
    }

    impl FakeWindow {
        fn new(clock: &ManualClock, step_ms: u64, exit_after: Option<u64>) -> Self {
            Self {
                clock: clock.clone(),
                step_ms,
                exit_after,
                pumped: 0,
                waits: Vec::new(),
                pending: Vec::new(),
                input: InputState::new(),
                exit: false,
                journal: Journal::default(),
            }
        }
    }

    impl WindowSystem for FakeWindow {
        fn process_events(&mut self, timeout: Duration) {
            self.waits.push(timeout);
            self.pumped += 1;
            self.clock.advance(self.step_ms);
            if self.exit_after.is_some_and(|n| self.pumped >= n) {
                self.exit = true;
            }
        }

        fn dispatch_events(&mut self) {
            self.journal.borrow_mut().push("dispatch".into());
            let events = std::mem::take(&mut self.pending);
            self.input.apply_events(&events);
            self.input.finalize();
        }

        fn input(&self) -> &InputState {
            &self.input
        }

        fn end_frame(&mut self) {
            self.journal.borrow_mut().push("end".into());
            self.input.end_tick();
        }

        fn clear_exit(&mut self) {
            self.exit = false;
        }

        fn request_exit(&mut self) {
            self.exit = true;
        }

        fn exit_requested(&self) -> bool {
            self.exit
        }
    }

    #[derive(Default)]
    struct RecordingScene {
        updates: u32,
        exit_on: Option<u32>,
        escape_seen: bool,
        last_dt: f32,
        blends: Vec<f32>,
        journal: Journal,
    }

    impl Scene for RecordingScene {
        fn update(&mut self, tick: &Tick<'_>) -> SceneControl {
            self.updates += 1;
            self.last_dt = tick.dt;
            self.journal.borrow_mut().push("update".into());
            if tick.input.is_key_pressed(KeyCode::Escape) {
                self.escape_seen = true;
            }
            if self.exit_on == Some(self.updates) {
                return SceneControl::Exit;
            }
            SceneControl::Continue
        }

        fn synchronize_motion(&mut self, _rate: f32, blend: f32) {
            self.blends.push(blend);
        }
    }

    struct FakeService {
        journal: Journal,
        name: &'static str,
        fail: bool,
    }

    impl Service for FakeService {
        fn name(&self) -> &str {
            self.name
        }

        fn startup(&mut self) -> Result<(), ServiceError> {
            if self.fail {
                return Err("refused".into());
            }
            self.journal.borrow_mut().push(format!("up {}", self.name));
            Ok(())
        }

        fn shutdown(&mut self) {
            self.journal.borrow_mut().push(format!("down {}", self.name));
        }
    }

    fn quiet_defs() -> UserDefs {
        let mut defs = UserDefs::default();
        defs.log.enabled = false;
        defs
    }

    fn ready_engine() -> Engine {
        let mut engine = EngineBuilder::new().with_defs(quiet_defs()).build();
        engine.initialize().unwrap();
        engine
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let engine = EngineBuilder::new().build();
        assert_eq!(engine.tick_rate(), 60);
        assert_eq!(engine.anim_rate(), 25.0);
        assert!(!engine.is_initialized());
    }

    #[test]
    fn builder_with_tick_rate() {
        let engine = EngineBuilder::new().with_tick_rate(30).build();
        assert_eq!(engine.tick_rate(), 30);
        assert!((engine.step_rate() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "Tick rate must be positive")]
    fn builder_with_tick_rate_panics_on_zero() {
        EngineBuilder::new().with_tick_rate(0);
    }

    #[test]
    fn builder_missing_defs_file_is_config_error() {
        let result = EngineBuilder::new().with_defs_file("no/such/defs.toml");
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    //=====================================================================
    // Lifecycle Tests
    //=====================================================================

    #[test]
    fn initialize_clamps_tick_rate() {
        let mut defs = quiet_defs();
        defs.tick_rate = 200;
        let mut engine = EngineBuilder::new().with_defs(defs).build();

        engine.initialize().unwrap();
        assert_eq!(engine.tick_rate(), 90);
    }

    #[test]
    fn initialize_and_finalize_are_idempotent() {
        let journal = Journal::default();
        let mut engine = EngineBuilder::new()
            .with_defs(quiet_defs())
            .with_service(FakeService { journal: journal.clone(), name: "audio", fail: false })
            .build();

        engine.initialize().unwrap();
        engine.initialize().unwrap();
        engine.finalize();
        engine.finalize();

        assert_eq!(*journal.borrow(), ["up audio", "down audio"]);
    }

    #[test]
    fn services_stop_in_reverse_on_drop() {
        let journal = Journal::default();
        {
            let mut engine = EngineBuilder::new()
                .with_defs(quiet_defs())
                .with_service(FakeService { journal: journal.clone(), name: "a", fail: false })
                .with_service(FakeService { journal: journal.clone(), name: "b", fail: false })
                .build();
            engine.initialize().unwrap();
        }

        assert_eq!(*journal.borrow(), ["up a", "up b", "down b", "down a"]);
    }

    #[test]
    fn failing_service_aborts_initialize() {
        let journal = Journal::default();
        let mut engine = EngineBuilder::new()
            .with_defs(quiet_defs())
            .with_service(FakeService { journal: journal.clone(), name: "a", fail: false })
            .with_service(FakeService { journal: journal.clone(), name: "b", fail: true })
            .build();

        let err = engine.initialize().unwrap_err();

        match &err {
            EngineError::ServiceStartup { service, source } => {
                assert_eq!(service, "b");
                assert_eq!(source.to_string(), "refused");
                assert_eq!(err.to_string(), "service b failed to start: refused");
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("Expected ServiceStartup, got {:?}", other),
        }
        assert!(!engine.is_initialized());
        assert_eq!(*journal.borrow(), ["up a", "down a"]);
    }

    #[test]
    fn missing_resource_manifest_is_not_fatal() {
        let mut defs = quiet_defs();
        defs.resources = Some("no/such/resources.toml".into());
        let mut engine = EngineBuilder::new().with_defs(defs).build();

        engine.initialize().unwrap();
        assert!(engine.resources().is_empty());
    }

    #[test]
    fn resource_manifest_is_loaded() {
        let path = std::env::temp_dir()
            .join(format!("momokit-engine-res-{}.toml", std::process::id()));
        std::fs::write(&path, "[groups.General]\nFileSystem = [\"media\"]\n").unwrap();

        let mut defs = quiet_defs();
        defs.resources = Some(path.clone());
        let mut engine = EngineBuilder::new().with_defs(defs).build();
        engine.initialize().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(engine.resources().len(), 1);
        assert_eq!(engine.resources()[0].group, "General");
    }

    //=====================================================================
    // Run Loop Tests
    //=====================================================================

    #[test]
    fn run_requires_initialize() {
        let mut engine = EngineBuilder::new().with_defs(quiet_defs()).build();
        let clock = ManualClock::new(0);
        let mut window = FakeWindow::new(&clock, 16, Some(1));
        let mut scene = RecordingScene::default();

        let result = engine.run_with_clock(&mut window, &mut scene, clock.clone());
        assert!(matches!(result, Err(EngineError::NotInitialized)));
        assert_eq!(window.pumped, 0);
    }

    #[test]
    fn steady_frames_run_one_tick_each_after_the_first() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(1000);
        let mut window = FakeWindow::new(&clock, 16, Some(10));
        let mut scene = RecordingScene::default();

        let summary = engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        assert_eq!(summary, RunSummary { frames: 10, ticks: 9 });
        assert_eq!(scene.updates, 9);
        assert!((scene.last_dt - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(scene.blends.len(), 10);
        assert!(scene.blends.iter().all(|b| (0.0..=1.0).contains(b)));
    }

    #[test]
    fn hooks_run_in_tick_order() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(0);
        let mut window = FakeWindow::new(&clock, 16, Some(3));
        let mut scene = RecordingScene::default();
        scene.journal = window.journal.clone();

        engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        assert_eq!(
            *window.journal.borrow(),
            ["dispatch", "update", "end", "dispatch", "update", "end"]
        );
    }

    #[test]
    fn scene_exit_stops_the_loop() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(0);
        let mut window = FakeWindow::new(&clock, 16, None);
        let mut scene = RecordingScene { exit_on: Some(4), ..Default::default() };

        let summary = engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        assert_eq!(scene.updates, 4);
        assert_eq!(summary.frames, 5);
        assert!(window.exit_requested());
    }

    #[test]
    fn dispatched_input_reaches_the_scene() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(0);
        let mut window = FakeWindow::new(&clock, 16, Some(2));
        window.pending.push(InputEvent::KeyDown { key: KeyCode::Escape, modifiers: Modifiers::NONE });
        let mut scene = RecordingScene::default();

        engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        assert!(scene.escape_seen);
    }

    #[test]
    fn frame_event_measures_gap_from_previous_frame() {
        assert_eq!(FrameEvent::at(1000, None), FrameEvent { now: 1000, since_last: 0 });
        assert_eq!(FrameEvent::at(1016, Some(1000)), FrameEvent { now: 1016, since_last: 16 });
    }

    #[test]
    fn each_run_restarts_the_time_base() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(0);
        let mut scene = RecordingScene::default();

        let mut window = FakeWindow::new(&clock, 16, Some(2));
        engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        // A long pause between runs must not be caught up.
        clock.advance(10_000);

        let mut window = FakeWindow::new(&clock, 16, Some(2));
        let summary = engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        assert_eq!(summary.ticks, 1);
        assert_eq!(scene.updates, 2);
    }

    #[test]
    fn same_window_runs_again_after_exit() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(0);
        let mut window = FakeWindow::new(&clock, 16, None);
        let mut scene = RecordingScene { exit_on: Some(2), ..Default::default() };

        let first = engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();
        assert!(window.exit_requested());

        scene.exit_on = Some(3);
        let second = engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        assert_eq!(first, RunSummary { frames: 3, ticks: 2 });
        assert_eq!(second, RunSummary { frames: 2, ticks: 1 });
    }

    //=====================================================================
    // Pacing Tests
    //=====================================================================

    #[test]
    fn loop_waits_until_next_tick_is_due() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(1000);
        let mut window = FakeWindow::new(&clock, 5, Some(4));
        let mut scene = RecordingScene::default();

        engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        // No time base yet, then 1005 → 1006, 1010 → 1022, 1015 → 1022.
        let waits: Vec<u64> = window.waits.iter().map(|w| w.as_millis() as u64).collect();
        assert_eq!(waits, [0, 1, 12, 7]);
    }

    #[test]
    fn wait_is_capped_at_one_tick() {
        let mut engine = ready_engine();
        let clock = ManualClock::new(0);
        let mut window = FakeWindow::new(&clock, 1, Some(30));
        let mut scene = RecordingScene::default();

        engine.run_with_clock(&mut window, &mut scene, clock.clone()).unwrap();

        assert!(window.waits.iter().all(|w| *w <= Duration::from_millis(16)));
        assert!(window.waits.iter().any(|w| !w.is_zero()));
    }
}
