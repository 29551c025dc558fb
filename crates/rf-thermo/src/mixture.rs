//! Ordered species sets (mechanisms).

use crate::error::{ThermoError, ThermoResult};
use crate::species::Species;
use rf_core::units::MolarMass;

/// Ordered, duplicate-free list of species: the mechanism a simulation runs over.
///
/// The set fixes the species ordering and the count `n` for every state and
/// property model built over it; per-species vectors (mole fractions, diffusion
/// coefficients) are always indexed in set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesSet {
    species: Vec<Species>,
}

impl SpeciesSet {
    /// Create a species set from an ordered list.
    ///
    /// Validates that the list is non-empty and free of duplicates.
    pub fn new(species: Vec<Species>) -> ThermoResult<Self> {
        if species.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "empty species set",
            });
        }
        for (i, s) in species.iter().enumerate() {
            if species[..i].contains(s) {
                return Err(ThermoError::InvalidArg {
                    what: "duplicate species in set",
                });
            }
        }
        Ok(Self { species })
    }

    /// Number of species `n` in the set.
    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    /// Species in set order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Index of a species in set order, if present.
    pub fn index_of(&self, species: Species) -> Option<usize> {
        self.species.iter().position(|s| *s == species)
    }

    /// Molar masses [kg/kmol] in set order.
    pub fn molar_masses(&self) -> Vec<MolarMass> {
        self.species.iter().map(|s| s.molar_mass()).collect()
    }
}
