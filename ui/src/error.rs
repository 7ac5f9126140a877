//! Error types for the navigation shell.

use thiserror::Error;

use crate::core::navigation::Method;

/// Failures surfaced by the shell's model layer.
///
/// Components never propagate these upwards: they turn them into the guarded
/// failure region and a `tracing` event.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("navigation shell rendered without a signed-in user")]
    MissingUser,

    #[error("unknown named route: {name}")]
    UnknownRoute { name: String },

    #[error("route {name} does not accept {method}")]
    MethodNotAllowed { name: String, method: Method },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("browser API unavailable: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
