//! Unity Lewis number closure integration tests.
//!
//! The closure's contract is checked both against a fixed-property stub model
//! (exact scenario values) and against the real mixture-averaged backend
//! (delegation fidelity).

use std::sync::Arc;

use rf_core::numeric::{Tolerances, nearly_equal};
use rf_core::units::{DynVisc, ThermCond, k, kg_per_m3, pa_s, w_per_m_k};
use rf_thermo::{GasState, Species, SpeciesSet};
use rf_transport::{
    MixtureAveraged, TransportError, TransportModel, TransportResult, UnityLewisTransport,
};

/// Inner model with fixed viscosity and conductivity, for exact-value tests.
struct FixedTransport {
    n: usize,
    mu: f64,
    lambda: f64,
}

impl TransportModel for FixedTransport {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn n_species(&self) -> usize {
        self.n
    }

    fn viscosity(&self, _state: &GasState) -> TransportResult<DynVisc> {
        Ok(pa_s(self.mu))
    }

    fn thermal_conductivity(&self, _state: &GasState) -> TransportResult<ThermCond> {
        Ok(w_per_m_k(self.lambda))
    }

    fn mix_diff_coeffs(&self, _state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        d.fill(1.0e-5);
        Ok(())
    }

    fn mix_diff_coeffs_mole(&self, _state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        d.fill(1.0e-5);
        Ok(())
    }

    fn mix_diff_coeffs_mass(&self, _state: &GasState, d: &mut [f64]) -> TransportResult<()> {
        d.fill(1.0e-5);
        Ok(())
    }
}

fn three_species_set() -> Arc<SpeciesSet> {
    Arc::new(SpeciesSet::new(vec![Species::CH4, Species::O2, Species::N2]).unwrap())
}

fn scenario_state(set: Arc<SpeciesSet>) -> GasState {
    // Density 1.2 kg/m³, cp 1000 J/(kg·K); with λ = 0.024 W/(m·K) the
    // unity-Lewis coefficient is 0.024 / (1.2 × 1000) = 2.0e-5 m²/s.
    GasState::new(set, k(300.0), kg_per_m3(1.2), 1000.0, vec![0.1, 0.2, 0.7]).unwrap()
}

#[test]
fn scenario_mass_fill_is_two_e_minus_five() {
    let closure = UnityLewisTransport::new(FixedTransport {
        n: 3,
        mu: 1.8e-5,
        lambda: 0.024,
    });
    let state = scenario_state(three_species_set());

    let mut d = [0.0; 3];
    closure.mix_diff_coeffs_mass(&state, &mut d).unwrap();

    let tol = Tolerances {
        abs: 0.0,
        rel: 1e-14,
    };
    for v in d {
        assert!(nearly_equal(v, 2.0e-5, tol), "d entry = {v}");
    }

    // The mole-gradient form fills the identical vector.
    let mut d_mole_grad = [0.0; 3];
    closure.mix_diff_coeffs(&state, &mut d_mole_grad).unwrap();
    assert_eq!(d, d_mole_grad);
}

#[test]
fn scenario_mole_only_fill_is_unsupported() {
    let closure = UnityLewisTransport::new(FixedTransport {
        n: 3,
        mu: 1.8e-5,
        lambda: 0.024,
    });
    let state = scenario_state(three_species_set());

    let mut d = [9.9; 3];
    let err = closure.mix_diff_coeffs_mole(&state, &mut d).unwrap_err();
    assert!(matches!(err, TransportError::NotImplemented { .. }));
    assert_eq!(d, [9.9; 3]);
}

#[test]
fn uniformity_invariant_over_mixture_averaged_inner() {
    let set = three_species_set();
    let closure = UnityLewisTransport::new(MixtureAveraged::new(set.clone()).unwrap());
    let state =
        GasState::new(set, k(1400.0), kg_per_m3(0.25), 1250.0, vec![0.02, 0.18, 0.8]).unwrap();

    let lambda = closure.thermal_conductivity(&state).unwrap().value;
    let dm = lambda / (state.density().value * state.cp_mass());

    let mut d = [0.0; 3];
    closure.mix_diff_coeffs(&state, &mut d).unwrap();
    for v in d {
        assert_eq!(v.to_bits(), dm.to_bits());
    }

    closure.mix_diff_coeffs_mass(&state, &mut d).unwrap();
    for v in d {
        assert_eq!(v.to_bits(), dm.to_bits());
        assert!(v.is_finite() && v >= 0.0);
    }
}

#[test]
fn viscosity_and_conductivity_delegate_bit_identically() {
    let set = three_species_set();
    let inner = MixtureAveraged::new(set.clone()).unwrap();
    let closure = UnityLewisTransport::new(MixtureAveraged::new(set.clone()).unwrap());
    let state =
        GasState::new(set, k(650.0), kg_per_m3(0.55), 1120.0, vec![0.1, 0.3, 0.6]).unwrap();

    assert_eq!(
        closure.viscosity(&state).unwrap().value,
        inner.viscosity(&state).unwrap().value
    );
    assert_eq!(
        closure.thermal_conductivity(&state).unwrap().value,
        inner.thermal_conductivity(&state).unwrap().value
    );
}

#[test]
fn species_count_mismatch_is_rejected_before_writes() {
    let closure = UnityLewisTransport::new(FixedTransport {
        n: 3,
        mu: 1.8e-5,
        lambda: 0.024,
    });
    let pair_set = Arc::new(SpeciesSet::new(vec![Species::N2, Species::O2]).unwrap());
    let state = GasState::new(pair_set, k(300.0), kg_per_m3(1.2), 1005.0, vec![0.8, 0.2]).unwrap();

    let mut d = [0.0; 2];
    let err = closure.mix_diff_coeffs(&state, &mut d).unwrap_err();
    assert!(matches!(
        err,
        TransportError::SpeciesCount {
            state_n: 2,
            model_n: 3
        }
    ));
    assert_eq!(d, [0.0; 2]);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For any valid state and conductivity, every filled entry is the
        /// same bit pattern and equals λ/(ρ·cp).
        #[test]
        fn uniformity_invariant(
            lambda in 1e-3_f64..1.0_f64,
            rho in 0.01_f64..10.0_f64,
            cp in 100.0_f64..5000.0_f64,
        ) {
            let closure = UnityLewisTransport::new(FixedTransport {
                n: 3,
                mu: 1.8e-5,
                lambda,
            });
            let state = GasState::new(
                three_species_set(),
                k(500.0),
                kg_per_m3(rho),
                cp,
                vec![0.1, 0.2, 0.7],
            )
            .unwrap();

            let mut d = [0.0; 3];
            closure.mix_diff_coeffs_mass(&state, &mut d).unwrap();

            let dm = lambda / (rho * cp);
            let tol = Tolerances { abs: 0.0, rel: 1e-12 };
            prop_assert!(nearly_equal(d[0], dm, tol));
            prop_assert_eq!(d[0].to_bits(), d[1].to_bits());
            prop_assert_eq!(d[1].to_bits(), d[2].to_bits());
            prop_assert!(d.iter().all(|v| v.is_finite() && *v >= 0.0));
        }

        /// The mole-only operation fails for every state.
        #[test]
        fn mole_only_always_fails(
            t in 200.0_f64..3000.0_f64,
            rho in 0.01_f64..10.0_f64,
        ) {
            let closure = UnityLewisTransport::new(FixedTransport {
                n: 3,
                mu: 1.8e-5,
                lambda: 0.05,
            });
            let state = GasState::new(
                three_species_set(),
                k(t),
                kg_per_m3(rho),
                1100.0,
                vec![0.3, 0.3, 0.4],
            )
            .unwrap();

            let mut d = [0.0; 3];
            let is_not_implemented = matches!(
                closure.mix_diff_coeffs_mole(&state, &mut d).unwrap_err(),
                TransportError::NotImplemented { .. }
            );
            prop_assert!(is_not_implemented);
        }
    }
}
