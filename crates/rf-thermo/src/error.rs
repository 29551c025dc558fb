//! Thermodynamic state errors.

use thiserror::Error;

/// Result type for thermodynamic state operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur building or querying a gas state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Non-physical values (negative density, temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
