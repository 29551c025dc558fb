//! Unity Lewis number transport closure.

use crate::error::{TransportError, TransportResult};
use crate::model::{TransportModel, validation};
use rf_core::RfError;
use rf_core::units::{DynVisc, ThermCond};
use rf_thermo::GasState;

/// Unity Lewis number approximation over a held mixture-averaged model.
///
/// Viscosity and thermal conductivity forward verbatim to the inner model;
/// both supported diffusion fills replace the inner model's per-species
/// coefficients with a single scalar
///
/// ```text
/// Dm = λ / (ρ · cp)
/// ```
///
/// so every species gets the same, composition-independent diffusivity and
/// the Lewis number is exactly one.
#[derive(Debug, Clone)]
pub struct UnityLewisTransport<M: TransportModel> {
    inner: M,
}

impl<M: TransportModel> UnityLewisTransport<M> {
    pub const NAME: &'static str = "unity-Lewis";

    /// Wrap an inner model (normally the mixture-averaged one).
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// The held inner model.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// The unity-Lewis scalar Dm = λ/(ρ·cp) [m²/s] for the given state.
    ///
    /// Recomputed from the inner model's conductivity on every call; nothing
    /// is cached between calls.
    fn unity_diff_coeff(&self, state: &GasState) -> TransportResult<f64> {
        let lambda = self.inner.thermal_conductivity(state)?;
        let dm = lambda.value / (state.density().value * state.cp_mass());
        if !dm.is_finite() {
            return Err(RfError::NonFinite {
                what: "unity-Lewis diffusion coefficient",
                value: dm,
            }
            .into());
        }
        if dm < 0.0 {
            return Err(RfError::Invariant {
                what: "negative unity-Lewis diffusion coefficient",
            }
            .into());
        }
        Ok(dm)
    }
}

impl<M: TransportModel> TransportModel for UnityLewisTransport<M> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn n_species(&self) -> usize {
        self.inner.n_species()
    }

    fn viscosity(&self, state: &GasState) -> TransportResult<DynVisc> {
        self.inner.viscosity(state)
    }

    fn thermal_conductivity(&self, state: &GasState) -> TransportResult<ThermCond> {
        self.inner.thermal_conductivity(state)
    }

    /// Writes Dm = λ/(ρ·cp) into every entry.
    ///
    /// These are the coefficients for diffusive mass fluxes computed from
    /// mole-fraction gradients with respect to the mass-averaged velocity.
    /// To get the expected unity-Lewis behavior the caller must pair them
    /// with the correction velocity
    ///
    /// ```text
    /// Vc = Σ_k (W_k / W̄) · Dm · ∇X_k
    /// ```
    ///
    /// which makes the diffusive mass fluxes sum to zero. The closure does
    /// not enforce that pairing.
    fn mix_diff_coeffs(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        validation::check_species_count(state, self.n_species())?;
        validation::check_buffer(d.len(), self.n_species())?;
        let dm = self.unity_diff_coeff(state)?;
        d.fill(dm);
        Ok(())
    }

    /// Not supported by this closure: always fails with
    /// [`TransportError::NotImplemented`] and never writes to `d`.
    fn mix_diff_coeffs_mole(&self, _state: &GasState, _d: &mut [f64]) -> TransportResult<()> {
        Err(TransportError::NotImplemented {
            model: Self::NAME,
            operation: "mix_diff_coeffs_mole",
        })
    }

    /// Writes Dm = λ/(ρ·cp) into every entry.
    ///
    /// These coefficients apply directly to mass-fraction gradients; no
    /// correction velocity is required.
    fn mix_diff_coeffs_mass(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        validation::check_species_count(state, self.n_species())?;
        validation::check_buffer(d.len(), self.n_species())?;
        let dm = self.unity_diff_coeff(state)?;
        d.fill(dm);
        Ok(())
    }
}
