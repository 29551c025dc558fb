//! rf-transport: gas-phase transport properties for reflow.
//!
//! Provides:
//! - `TransportModel` trait: viscosity, thermal conductivity, and per-species
//!   diffusion coefficients in three flux formulations
//! - `MixtureAveraged`: correlation-based mixture-averaged backend
//! - `UnityLewisTransport`: unity Lewis number closure layered on top of it
//! - per-species transport-parameter catalog and a model factory
//!
//! # Architecture
//!
//! Callers hold a model through the `TransportModel` trait and pass each
//! `GasState` snapshot by reference; which diffusion formula runs is decided
//! by the variant chosen at construction, while viscosity and conductivity
//! always come from the shared mixture-averaged computation.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rf_core::units::{k, kg_per_m3};
//! use rf_thermo::{GasState, Species, SpeciesSet};
//! use rf_transport::{MixtureAveraged, TransportModel, UnityLewisTransport};
//!
//! let set = Arc::new(SpeciesSet::new(vec![Species::CH4, Species::O2, Species::N2]).unwrap());
//! let model = UnityLewisTransport::new(MixtureAveraged::new(set.clone()).unwrap());
//! let state = GasState::new(set, k(1200.0), kg_per_m3(0.29), 1300.0, vec![0.05, 0.2, 0.75])
//!     .unwrap();
//!
//! let mut d = vec![0.0; 3];
//! model.mix_diff_coeffs_mass(&state, &mut d).unwrap();
//! assert!(d.iter().all(|v| *v > 0.0));
//! assert_eq!(d[0], d[2]);
//! ```

pub mod data;
pub mod error;
pub mod mixture_averaged;
pub mod model;
pub mod unity_lewis;

// Re-exports for ergonomics
pub use data::{TransportParams, params_for};
pub use error::{TransportError, TransportResult};
pub use mixture_averaged::MixtureAveraged;
pub use model::{TransportModel, TransportModelKind, build_transport_model};
pub use unity_lewis::UnityLewisTransport;
