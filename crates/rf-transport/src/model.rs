//! Transport model trait, variant selection, and validation helpers.

use std::sync::Arc;

use crate::error::{TransportError, TransportResult};
use crate::mixture_averaged::MixtureAveraged;
use crate::unity_lewis::UnityLewisTransport;
use rf_core::units::{DynVisc, ThermCond};
use rf_thermo::{GasState, SpeciesSet};

/// Trait for gas-phase transport property models.
///
/// Implementations must be thread-safe (Send + Sync); every operation is a
/// pure function of the state snapshot passed to it. A model is bound to one
/// species set at construction and keeps its species count `n` for life.
///
/// Diffusion-coefficient operations fill a caller-owned buffer of length
/// exactly `n` [m²/s], one entry per species in set order, recomputed on every
/// call with no caching.
pub trait TransportModel: Send + Sync {
    /// Get the model name (for diagnostics/serialization).
    fn name(&self) -> &'static str;

    /// Species count `n` of the bound species set.
    fn n_species(&self) -> usize;

    /// Compute mixture dynamic viscosity [Pa·s] at the given state.
    fn viscosity(&self, state: &GasState) -> TransportResult<DynVisc>;

    /// Compute mixture thermal conductivity [W/(m·K)] at the given state.
    fn thermal_conductivity(&self, state: &GasState) -> TransportResult<ThermCond>;

    /// Fill `d` with per-species diffusion coefficients [m²/s] for diffusive
    /// mass fluxes computed from **mole**-fraction gradients with respect to
    /// the mass-averaged velocity.
    ///
    /// Postcondition: every entry is finite and non-negative.
    fn mix_diff_coeffs(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()>;

    /// Fill `d` with diffusion coefficients [m²/s] for fluxes computed purely
    /// from **mole**-fraction gradients, without the mass-averaged correction
    /// velocity.
    ///
    /// Not every variant supports this formulation; unsupported variants fail
    /// with [`TransportError::NotImplemented`] and leave `d` untouched.
    fn mix_diff_coeffs_mole(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()>;

    /// Fill `d` with diffusion coefficients [m²/s] for diffusive mass fluxes
    /// computed from **mass**-fraction gradients.
    fn mix_diff_coeffs_mass(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()>;
}

/// Transport model variants selectable at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportModelKind {
    /// Correlation-based mixture-averaged model.
    MixtureAveraged,
    /// Unity Lewis number closure over the mixture-averaged model.
    UnityLewis,
}

impl TransportModelKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::MixtureAveraged => MixtureAveraged::NAME,
            Self::UnityLewis => UnityLewisTransport::<MixtureAveraged>::NAME,
        }
    }
}

impl std::str::FromStr for TransportModelKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mixture-averaged" | "mix" => Ok(Self::MixtureAveraged),
            "unity-lewis" | "unity" => Ok(Self::UnityLewis),
            _ => Err("unknown transport model"),
        }
    }
}

/// Build the selected transport model variant over a species set.
///
/// Callers hold the result through the trait; diffusion-coefficient calls
/// dispatch to the variant chosen here, while viscosity and conductivity
/// always come from the shared mixture-averaged computation.
pub fn build_transport_model(
    kind: TransportModelKind,
    set: Arc<SpeciesSet>,
) -> TransportResult<Box<dyn TransportModel>> {
    match kind {
        TransportModelKind::MixtureAveraged => Ok(Box::new(MixtureAveraged::new(set)?)),
        TransportModelKind::UnityLewis => Ok(Box::new(UnityLewisTransport::new(
            MixtureAveraged::new(set)?,
        ))),
    }
}

/// Validation helpers shared by the model variants.
pub(crate) mod validation {
    use super::*;
    use rf_core::RfError;

    /// Ensure the state was built over the same mechanism size as the model.
    pub fn check_species_count(state: &GasState, model_n: usize) -> TransportResult<()> {
        if state.n_species() != model_n {
            return Err(TransportError::SpeciesCount {
                state_n: state.n_species(),
                model_n,
            });
        }
        Ok(())
    }

    /// Ensure the output buffer holds exactly one entry per species.
    pub fn check_buffer(len: usize, n: usize) -> TransportResult<()> {
        if len != n {
            return Err(TransportError::BufferLength { len, n });
        }
        Ok(())
    }

    /// Postcondition check: every filled entry finite and non-negative.
    pub fn validate_diff_coeffs(d: &[f64]) -> TransportResult<()> {
        for v in d {
            if !v.is_finite() {
                return Err(RfError::NonFinite {
                    what: "diffusion coefficient",
                    value: *v,
                }
                .into());
            }
            if *v < 0.0 {
                return Err(RfError::Invariant {
                    what: "negative diffusion coefficient",
                }
                .into());
            }
        }
        Ok(())
    }
}
