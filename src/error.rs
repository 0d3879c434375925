use thiserror::Error;

use crate::coordinator::Role;

/// Startup failures. There's nothing to fail once the actors are running.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no mode supplied, use one of {0}")]
    MissingMode(String),
    #[error("mode must be a number, got {0:?}")]
    NotAMode(String),
    #[error("there's no mode {0}, modes are 1 to 4")]
    UnknownMode(i64),
    #[error("expected a single mode argument, got {0}")]
    TooManyArguments(usize),
    #[error("invalid {name}={value:?}: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to spawn {role} thread #{id}")]
    Spawn {
        role: Role,
        id: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("{role} {id} panicked")]
    ActorPanicked { role: Role, id: usize },
}
