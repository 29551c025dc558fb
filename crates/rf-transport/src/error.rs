//! Transport property errors.

use rf_core::RfError;
use rf_thermo::ThermoError;
use thiserror::Error;

/// Result type for transport property operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur during transport property calculations.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Operation a model variant deliberately does not provide.
    ///
    /// Deterministic: raised on every call regardless of state. The buffer is
    /// never written.
    #[error("{operation} is not implemented for transport model {model}")]
    NotImplemented {
        model: &'static str,
        operation: &'static str,
    },

    /// Output buffer does not hold exactly one entry per species.
    #[error("Diffusion buffer length {len} does not match species count {n}")]
    BufferLength { len: usize, n: usize },

    /// State built over a different mechanism than the model.
    #[error("State has {state_n} species but model was built for {model_n}")]
    SpeciesCount { state_n: usize, model_n: usize },

    /// Catalog gap discovered at backend construction.
    #[error("No transport parameters for species {species}")]
    MissingTransportData { species: &'static str },

    /// Upstream state error, propagated unmodified.
    #[error(transparent)]
    Thermo(#[from] ThermoError),

    /// Numeric validation failure in a computed property.
    #[error(transparent)]
    Core(#[from] RfError),
}
