//=========================================================================
// Engine Errors
//=========================================================================

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::core::services::ServiceError;
use crate::platform::PlatformError;

/// Errors surfaced by [`Engine`](super::Engine) setup and execution.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `run` was called before `initialize`.
    #[error("engine is not initialized")]
    NotInitialized,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("service {service} failed to start: {source}")]
    ServiceStartup {
        service: String,
        #[source]
        source: ServiceError,
    },

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
