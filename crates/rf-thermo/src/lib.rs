//! rf-thermo: gas-phase thermodynamic state for reflow.
//!
//! Provides:
//! - Chemical species definitions (O2, N2, H2, ...)
//! - `SpeciesSet`: the ordered species list (mechanism) a simulation runs over
//! - `GasState`: a validated, immutable thermodynamic state snapshot
//!
//! # Architecture
//!
//! A `SpeciesSet` fixes species ordering and count for the lifetime of a
//! simulation; every `GasState` is built over a shared set and carries the
//! intensive state (temperature, density, mixture cp, mole fractions) that
//! property models read. Models never mutate a state; the simulation advances
//! by constructing new snapshots.

pub mod error;
pub mod mixture;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use error::{ThermoError, ThermoResult};
pub use mixture::SpeciesSet;
pub use species::Species;
pub use state::{GasState, SpecHeatCapacity};
