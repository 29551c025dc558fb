//! Correlation-based mixture-averaged transport model.
//!
//! Pure-species viscosity and thermal conductivity come from Sutherland-form
//! fits, combined with the Wilke rule (viscosity) and the standard
//! combination rule (conductivity). Binary diffusivities come from the Fuller
//! correlation at the state's ideal-gas pressure and are combined into
//! per-species mixture-averaged coefficients in three flux formulations:
//!
//! - mole-fraction gradients with mass-averaged reference velocity
//! - mole-fraction gradients without the correction velocity
//! - mass-fraction gradients
//!
//! A species with no diffusion partner (pure gas, or mole fraction 1) falls
//! back to its self-diffusivity.

use std::sync::Arc;

use crate::data::{TransportParams, params_for, sutherland};
use crate::error::{TransportError, TransportResult};
use crate::model::{TransportModel, validation};
use rf_core::units::{DynVisc, MolarMass, ThermCond, pa_s, w_per_m_k};
use rf_thermo::{GasState, SpeciesSet};

/// Mixture-averaged transport model over a fixed species set.
#[derive(Debug, Clone)]
pub struct MixtureAveraged {
    set: Arc<SpeciesSet>,
    molar_masses: Vec<MolarMass>,
    params: Vec<TransportParams>,
}

impl MixtureAveraged {
    pub const NAME: &'static str = "mixture-averaged";

    /// Build the model, resolving catalog parameters for every species.
    pub fn new(set: Arc<SpeciesSet>) -> TransportResult<Self> {
        let params = set
            .species()
            .iter()
            .map(|&s| {
                params_for(s).ok_or(TransportError::MissingTransportData { species: s.key() })
            })
            .collect::<TransportResult<Vec<_>>>()?;
        let molar_masses = set.molar_masses();
        Ok(Self {
            set,
            molar_masses,
            params,
        })
    }

    /// The species set this model is bound to.
    pub fn species_set(&self) -> &Arc<SpeciesSet> {
        &self.set
    }

    fn species_viscosities(&self, t: f64) -> Vec<f64> {
        self.params
            .iter()
            .map(|p| sutherland(p.mu_ref, p.s_visc, t))
            .collect()
    }

    fn species_conductivities(&self, t: f64) -> Vec<f64> {
        self.params
            .iter()
            .map(|p| sutherland(p.lambda_ref, p.s_cond, t))
            .collect()
    }

    /// Fuller-correlation binary diffusivity D_jk [m²/s] at temperature `t`
    /// [K] and pressure `p` [Pa]. `j == k` gives the self-diffusivity.
    fn binary_diff_coeff(&self, t: f64, p: f64, j: usize, k: usize) -> f64 {
        let w_j = self.molar_masses[j];
        let w_k = self.molar_masses[k];
        let w_jk = 2.0 / (1.0 / w_j + 1.0 / w_k);
        let v_j = self.params[j].diff_vol.cbrt();
        let v_k = self.params[k].diff_vol.cbrt();
        1.43e-2 * t.powf(1.75) / (p * w_jk.sqrt() * (v_j + v_k).powi(2))
    }

    fn check_call(&self, state: &GasState, buffer_len: usize) -> TransportResult<()> {
        validation::check_species_count(state, self.n_species())?;
        validation::check_buffer(buffer_len, self.n_species())
    }
}

impl TransportModel for MixtureAveraged {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn n_species(&self) -> usize {
        self.set.n_species()
    }

    /// Wilke combination of Sutherland pure-species viscosities.
    fn viscosity(&self, state: &GasState) -> TransportResult<DynVisc> {
        validation::check_species_count(state, self.n_species())?;
        let t = state.temperature().value;
        let mu = self.species_viscosities(t);
        let x = state.mole_fractions();
        let n = self.n_species();

        let mut mix = 0.0;
        for i in 0..n {
            let mut denom = 0.0;
            for j in 0..n {
                let ratio_mu = (mu[i] / mu[j]).sqrt();
                let ratio_w = (self.molar_masses[j] / self.molar_masses[i]).powf(0.25);
                let phi = (1.0 + ratio_mu * ratio_w).powi(2)
                    / (8.0 * (1.0 + self.molar_masses[i] / self.molar_masses[j])).sqrt();
                denom += x[j] * phi;
            }
            mix += x[i] * mu[i] / denom;
        }
        Ok(pa_s(mix))
    }

    /// Combination rule λ = ½(Σ x_k·λ_k + (Σ x_k/λ_k)⁻¹) over Sutherland
    /// pure-species conductivities.
    fn thermal_conductivity(&self, state: &GasState) -> TransportResult<ThermCond> {
        validation::check_species_count(state, self.n_species())?;
        let t = state.temperature().value;
        let lambda = self.species_conductivities(t);
        let x = state.mole_fractions();

        let mut sum = 0.0;
        let mut sum_recip = 0.0;
        for (xk, lk) in x.iter().zip(&lambda) {
            sum += xk * lk;
            sum_recip += xk / lk;
        }
        Ok(w_per_m_k(0.5 * (sum + 1.0 / sum_recip)))
    }

    /// d[k] = (1 − Y_k) / Σ_{j≠k} X_j/D_jk, self-diffusivity fallback.
    fn mix_diff_coeffs(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        self.check_call(state, d.len())?;
        let t = state.temperature().value;
        let p = state.pressure().value;
        let x = state.mole_fractions();
        let y = state.mass_fractions();
        let n = self.n_species();

        for k in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != k {
                    sum += x[j] / self.binary_diff_coeff(t, p, j, k);
                }
            }
            d[k] = if sum > 0.0 {
                (1.0 - y[k]) / sum
            } else {
                self.binary_diff_coeff(t, p, k, k)
            };
        }
        validation::validate_diff_coeffs(d)
    }

    /// d[k] = (1 − X_k) / Σ_{j≠k} X_j/D_jk, self-diffusivity fallback.
    fn mix_diff_coeffs_mole(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        self.check_call(state, d.len())?;
        let t = state.temperature().value;
        let p = state.pressure().value;
        let x = state.mole_fractions();
        let n = self.n_species();

        for k in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != k {
                    sum += x[j] / self.binary_diff_coeff(t, p, j, k);
                }
            }
            d[k] = if sum > 0.0 {
                (1.0 - x[k]) / sum
            } else {
                self.binary_diff_coeff(t, p, k, k)
            };
        }
        validation::validate_diff_coeffs(d)
    }

    /// 1/d[k] = Σ_{j≠k} X_j/D_jk + X_k/(1−Y_k)·Σ_{j≠k} Y_j/D_jk,
    /// self-diffusivity fallback.
    fn mix_diff_coeffs_mass(&self, state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        self.check_call(state, d.len())?;
        let t = state.temperature().value;
        let p = state.pressure().value;
        let x = state.mole_fractions();
        let y = state.mass_fractions();
        let n = self.n_species();

        for k in 0..n {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for j in 0..n {
                if j != k {
                    let d_jk = self.binary_diff_coeff(t, p, j, k);
                    sum_x += x[j] / d_jk;
                    sum_y += y[j] / d_jk;
                }
            }
            let denom = if 1.0 - y[k] > 0.0 {
                sum_x + x[k] * sum_y / (1.0 - y[k])
            } else {
                0.0
            };
            d[k] = if denom > 0.0 {
                1.0 / denom
            } else {
                self.binary_diff_coeff(t, p, k, k)
            };
        }
        validation::validate_diff_coeffs(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_core::units::{k, kg_per_m3};
    use rf_thermo::Species;

    fn pure_air_state() -> (MixtureAveraged, GasState) {
        let set = Arc::new(SpeciesSet::new(vec![Species::Air]).unwrap());
        let model = MixtureAveraged::new(set.clone()).unwrap();
        let state = GasState::new(set, k(300.0), kg_per_m3(1.177), 1005.0, vec![1.0]).unwrap();
        (model, state)
    }

    #[test]
    fn pure_air_viscosity_reduces_to_sutherland() {
        let (model, state) = pure_air_state();
        let mu = model.viscosity(&state).unwrap().value;
        let expected = sutherland(1.716e-5, 111.0, 300.0);
        assert!((mu - expected).abs() < 1e-12, "mu = {mu}");
    }

    #[test]
    fn pure_air_conductivity_reduces_to_sutherland() {
        let (model, state) = pure_air_state();
        let lambda = model.thermal_conductivity(&state).unwrap().value;
        let expected = sutherland(0.0241, 194.0, 300.0);
        assert!((lambda - expected).abs() < 1e-12, "lambda = {lambda}");
    }

    #[test]
    fn pure_species_diffusion_falls_back_to_self_diffusivity() {
        let (model, state) = pure_air_state();
        let mut d = [0.0];
        model.mix_diff_coeffs(&state, &mut d).unwrap();

        // Self-diffusivity of air near ambient is around 2e-5 m²/s
        assert!(d[0] > 1e-5 && d[0] < 4e-5, "d = {}", d[0]);

        let mut d_mass = [0.0];
        model.mix_diff_coeffs_mass(&state, &mut d_mass).unwrap();
        assert_eq!(d, d_mass);
    }

    #[test]
    fn binary_diffusivity_scales_with_temperature_and_pressure() {
        let set = Arc::new(SpeciesSet::new(vec![Species::N2, Species::O2]).unwrap());
        let model = MixtureAveraged::new(set).unwrap();

        let base = model.binary_diff_coeff(300.0, 101_325.0, 0, 1);
        // N2-O2 at ambient conditions is about 2e-5 m²/s
        assert!(base > 1.5e-5 && base < 2.5e-5, "D = {base}");

        let hot = model.binary_diff_coeff(600.0, 101_325.0, 0, 1);
        let ratio = hot / base;
        let expected = 2.0_f64.powf(1.75);
        assert!((ratio - expected).abs() < 1e-9);

        let compressed = model.binary_diff_coeff(300.0, 202_650.0, 0, 1);
        assert!((compressed - base / 2.0).abs() < 1e-12);
    }

    #[test]
    fn mixture_fills_are_finite_and_positive() {
        let set = Arc::new(
            SpeciesSet::new(vec![Species::CH4, Species::O2, Species::N2]).unwrap(),
        );
        let model = MixtureAveraged::new(set.clone()).unwrap();
        let state =
            GasState::new(set, k(800.0), kg_per_m3(0.42), 1150.0, vec![0.1, 0.2, 0.7]).unwrap();

        let mut d = [0.0; 3];
        model.mix_diff_coeffs(&state, &mut d).unwrap();
        assert!(d.iter().all(|v| v.is_finite() && *v > 0.0), "d = {d:?}");

        model.mix_diff_coeffs_mole(&state, &mut d).unwrap();
        assert!(d.iter().all(|v| v.is_finite() && *v > 0.0), "d = {d:?}");

        model.mix_diff_coeffs_mass(&state, &mut d).unwrap();
        assert!(d.iter().all(|v| v.is_finite() && *v > 0.0), "d = {d:?}");
    }

    #[test]
    fn flux_formulations_differ_for_mixtures() {
        let set = Arc::new(SpeciesSet::new(vec![Species::H2, Species::N2]).unwrap());
        let model = MixtureAveraged::new(set.clone()).unwrap();
        let state = GasState::new(set, k(500.0), kg_per_m3(0.35), 2000.0, vec![0.3, 0.7]).unwrap();

        let mut d_mole = [0.0; 2];
        let mut d_mass = [0.0; 2];
        model.mix_diff_coeffs(&state, &mut d_mole).unwrap();
        model.mix_diff_coeffs_mass(&state, &mut d_mass).unwrap();

        // Mass- and mole-gradient coefficients agree only in special cases;
        // H2/N2 is strongly asymmetric so they must differ.
        assert!((d_mole[0] - d_mass[0]).abs() > 1e-9);
    }

    #[test]
    fn buffer_length_is_checked_before_writes() {
        let set = Arc::new(SpeciesSet::new(vec![Species::N2, Species::O2]).unwrap());
        let model = MixtureAveraged::new(set.clone()).unwrap();
        let state =
            GasState::new(set, k(300.0), kg_per_m3(1.2), 1005.0, vec![0.8, 0.2]).unwrap();

        let mut d = [7.0; 3];
        let err = model.mix_diff_coeffs(&state, &mut d).unwrap_err();
        assert!(matches!(err, TransportError::BufferLength { len: 3, n: 2 }));
        assert_eq!(d, [7.0; 3]);
    }

    #[test]
    fn species_count_mismatch_is_rejected() {
        let model_set = Arc::new(SpeciesSet::new(vec![Species::N2, Species::O2]).unwrap());
        let state_set = Arc::new(SpeciesSet::new(vec![Species::N2]).unwrap());
        let model = MixtureAveraged::new(model_set).unwrap();
        let state = GasState::new(state_set, k(300.0), kg_per_m3(1.1), 1040.0, vec![1.0]).unwrap();

        assert!(matches!(
            model.viscosity(&state).unwrap_err(),
            TransportError::SpeciesCount {
                state_n: 1,
                model_n: 2
            }
        ));
    }

    #[test]
    fn viscosity_increases_with_temperature() {
        let set = Arc::new(SpeciesSet::new(vec![Species::Air]).unwrap());
        let model = MixtureAveraged::new(set.clone()).unwrap();

        let cold =
            GasState::new(set.clone(), k(300.0), kg_per_m3(1.18), 1005.0, vec![1.0]).unwrap();
        let hot = GasState::new(set, k(1500.0), kg_per_m3(0.235), 1200.0, vec![1.0]).unwrap();

        let mu_cold = model.viscosity(&cold).unwrap().value;
        let mu_hot = model.viscosity(&hot).unwrap().value;
        assert!(mu_hot > mu_cold);
    }
}
