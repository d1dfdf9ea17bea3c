//=========================================================================
// Services
//=========================================================================
//
// Long-lived engine subsystems (audio, asset cache, scripting, ...) with
// an explicit start/stop lifecycle owned by the engine.
//
// Ordering:
// ```text
//   startup:   A → B → C          (registration order)
//   shutdown:  C → B → A          (reverse)
//   failure:   A → B → C✗  ⇒  B.shutdown → A.shutdown, error returned
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::error::Error;

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== ServiceError ========================================================

/// Whatever a service reports when it cannot start.
pub type ServiceError = Box<dyn Error + Send + Sync>;

//=== Service Trait =======================================================

/// A subsystem started during engine initialisation.
pub trait Service {
    /// Name used in logs and startup errors.
    fn name(&self) -> &str;

    /// Brings the service up. An `Err` aborts engine initialisation.
    fn startup(&mut self) -> Result<(), ServiceError>;

    /// Releases resources. Only called after a successful `startup`.
    fn shutdown(&mut self);
}

//=== StartupFailure ======================================================

/// The first service that refused to start.
#[derive(Debug)]
pub struct StartupFailure {
    pub service: String,
    pub source: ServiceError,
}

//=== ServiceRegistry =====================================================

/// Ordered set of services plus how many are currently running.
///
/// Services always start from the front; `running` is therefore a prefix
/// length and shutdown walks that prefix backwards.
#[derive(Default)]
pub struct ServiceRegistry {
    services: Vec<Box<dyn Service>>,
    running: usize,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, service: Box<dyn Service>) {
        debug!(target: "engine", "Service registered: {}", service.name());
        self.services.push(service);
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn running(&self) -> usize {
        self.running
    }

    //--- Lifecycle --------------------------------------------------------

    /// Starts every stopped service in order.
    ///
    /// On failure the services started by this call and any earlier ones are
    /// stopped again in reverse order.
    pub fn start_all(&mut self) -> Result<(), StartupFailure> {
        while self.running < self.services.len() {
            let service = &mut self.services[self.running];
            match service.startup() {
                Ok(()) => {
                    info!(target: "engine", "Service started: {}", service.name());
                    self.running += 1;
                }
                Err(source) => {
                    let failure = StartupFailure { service: service.name().to_string(), source };
                    warn!(
                        target: "engine",
                        "Service {} failed to start: {}",
                        failure.service,
                        failure.source
                    );
                    self.stop_all();
                    return Err(failure);
                }
            }
        }
        Ok(())
    }

    /// Stops running services in reverse start order.
    pub fn stop_all(&mut self) {
        while self.running > 0 {
            self.running -= 1;
            let service = &mut self.services[self.running];
            service.shutdown();
            info!(target: "engine", "Service stopped: {}", service.name());
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
