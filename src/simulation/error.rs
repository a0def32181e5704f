//! Error types for configuration loading and validation.
//!
//! Ticking the simulation never fails; only reading, writing and checking
//! [`Params`](super::params::Params) can.

use std::fmt;
use std::io;

/// Error returned by configuration I/O and validation.
#[derive(Debug)]
pub enum SimulationError {
    /// Reading or writing a file failed.
    Io(io::Error),
    /// The file was not valid JSON for the expected structure.
    Json(serde_json::Error),
    /// A parameter is out of its allowed range.
    InvalidParams(String),
    /// A color string is not of the form `#RRGGBB`.
    InvalidColor(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Io(err) => write!(f, "config IO error: {}", err),
            SimulationError::Json(err) => write!(f, "config parse error: {}", err),
            SimulationError::InvalidParams(msg) => write!(f, "invalid parameters: {}", msg),
            SimulationError::InvalidColor(value) => write!(f, "invalid color: {:?}", value),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Io(err) => Some(err),
            SimulationError::Json(err) => Some(err),
            SimulationError::InvalidParams(_) | SimulationError::InvalidColor(_) => None,
        }
    }
}

impl From<io::Error> for SimulationError {
    fn from(err: io::Error) -> Self {
        SimulationError::Io(err)
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::Json(err)
    }
}
