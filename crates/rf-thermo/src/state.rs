//! Thermodynamic state snapshots.

use std::sync::Arc;

use crate::error::{ThermoError, ThermoResult};
use crate::mixture::SpeciesSet;
use rf_core::units::constants::R_UNIVERSAL;
use rf_core::units::{Density, Pressure, Temperature, pa};

/// Specific heat capacity [J/(kg·K)].
///
/// Not part of uom's convenient set, so we use f64 with clear documentation.
pub type SpecHeatCapacity = f64;

/// Immutable gas-phase state snapshot over a shared species set.
///
/// Holds the intensive state property models read: temperature, mass density,
/// mixture specific heat at constant pressure, and normalized mole fractions
/// in set order. Construction validates and normalizes; afterwards the state
/// is read-only. The simulation advances by building new snapshots.
#[derive(Debug, Clone)]
pub struct GasState {
    set: Arc<SpeciesSet>,
    temperature: Temperature,
    density: Density,
    cp_mass: SpecHeatCapacity,
    mole_fractions: Vec<f64>,
}

impl GasState {
    /// Create a state snapshot.
    ///
    /// Validates that temperature, density, and cp are positive and finite and
    /// that `mole_fractions` has exactly one entry per species in the set with
    /// finite, non-negative values and a positive sum; fractions are
    /// normalized to sum to 1.
    pub fn new(
        set: Arc<SpeciesSet>,
        temperature: Temperature,
        density: Density,
        cp_mass: SpecHeatCapacity,
        mole_fractions: Vec<f64>,
    ) -> ThermoResult<Self> {
        if !temperature.value.is_finite() || temperature.value <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        if !density.value.is_finite() || density.value <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        if !cp_mass.is_finite() || cp_mass <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "cp must be positive and finite",
            });
        }
        if mole_fractions.len() != set.n_species() {
            return Err(ThermoError::InvalidArg {
                what: "mole fraction count does not match species set",
            });
        }

        let mut sum = 0.0;
        for frac in &mole_fractions {
            if !frac.is_finite() {
                return Err(ThermoError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if *frac < 0.0 {
                return Err(ThermoError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
        }
        if sum <= 0.0 || !sum.is_finite() {
            return Err(ThermoError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        let normalized = mole_fractions.into_iter().map(|f| f / sum).collect();

        Ok(Self {
            set,
            temperature,
            density,
            cp_mass,
            mole_fractions: normalized,
        })
    }

    /// The species set this state is defined over.
    pub fn species_set(&self) -> &Arc<SpeciesSet> {
        &self.set
    }

    /// Number of species `n`.
    pub fn n_species(&self) -> usize {
        self.set.n_species()
    }

    /// Temperature [K].
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Mass density [kg/m³].
    pub fn density(&self) -> Density {
        self.density
    }

    /// Mixture specific heat at constant pressure [J/(kg·K)].
    pub fn cp_mass(&self) -> SpecHeatCapacity {
        self.cp_mass
    }

    /// Normalized mole fractions in set order.
    pub fn mole_fractions(&self) -> &[f64] {
        &self.mole_fractions
    }

    /// Mole fraction of species `k` (set order).
    pub fn mole_fraction(&self, k: usize) -> f64 {
        self.mole_fractions[k]
    }

    /// Mean molar mass W̄ = Σ X_k·W_k [kg/kmol].
    pub fn mean_molar_mass(&self) -> f64 {
        self.set
            .species()
            .iter()
            .zip(&self.mole_fractions)
            .map(|(s, x)| s.molar_mass() * x)
            .sum()
    }

    /// Mass fractions Y_k = X_k·W_k / W̄ in set order.
    pub fn mass_fractions(&self) -> Vec<f64> {
        let w_mean = self.mean_molar_mass();
        self.set
            .species()
            .iter()
            .zip(&self.mole_fractions)
            .map(|(s, x)| x * s.molar_mass() / w_mean)
            .collect()
    }

    /// Ideal-gas pressure p = ρ·R·T / W̄ [Pa].
    pub fn pressure(&self) -> Pressure {
        let p = self.density.value * R_UNIVERSAL * self.temperature.value / self.mean_molar_mass();
        pa(p)
    }
}
