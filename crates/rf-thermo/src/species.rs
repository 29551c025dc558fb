//! Chemical species definitions.

use rf_core::units::MolarMass;

/// Gas-phase species relevant for combustion and reacting-flow systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Oxygen (O₂)
    O2,
    /// Nitrogen (N₂)
    N2,
    /// Hydrogen (H₂)
    H2,
    /// Water vapor (H₂O)
    H2O,
    /// Methane (CH₄)
    CH4,
    /// Carbon monoxide (CO)
    CO,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Ammonia (NH₃)
    Ammonia,
    /// Argon (Ar)
    Ar,
    /// Helium (He)
    He,
    /// Air (pseudo-species for non-reacting bath gas)
    Air,
}

impl Species {
    pub const ALL: [Species; 11] = [
        Species::O2,
        Species::N2,
        Species::H2,
        Species::H2O,
        Species::CH4,
        Species::CO,
        Species::CO2,
        Species::Ammonia,
        Species::Ar,
        Species::He,
        Species::Air,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::O2 => "O2",
            Species::N2 => "N2",
            Species::H2 => "H2",
            Species::H2O => "H2O",
            Species::CH4 => "CH4",
            Species::CO => "CO",
            Species::CO2 => "CO2",
            Species::Ammonia => "NH3",
            Species::Ar => "Ar",
            Species::He => "He",
            Species::Air => "Air",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::O2 => "Oxygen",
            Species::N2 => "Nitrogen",
            Species::H2 => "Hydrogen",
            Species::H2O => "Water",
            Species::CH4 => "Methane",
            Species::CO => "Carbon Monoxide",
            Species::CO2 => "Carbon Dioxide",
            Species::Ammonia => "Ammonia",
            Species::Ar => "Argon",
            Species::He => "Helium",
            Species::Air => "Air",
        }
    }

    /// Get molar mass [kg/kmol] for this species.
    ///
    /// Values sourced from standard reference data (e.g., NIST).
    pub fn molar_mass(&self) -> MolarMass {
        match self {
            Species::O2 => 31.999,
            Species::N2 => 28.014,
            Species::H2 => 2.016,
            Species::H2O => 18.015,
            Species::CH4 => 16.043,
            Species::CO => 28.010,
            Species::CO2 => 44.010,
            Species::Ammonia => 17.031,
            Species::Ar => 39.948,
            Species::He => 4.003,
            Species::Air => 28.965,
        }
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "O2" | "OXYGEN" => Ok(Species::O2),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "H2O" | "WATER" => Ok(Species::H2O),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "NH3" | "AMMONIA" => Ok(Species::Ammonia),
            "AR" | "ARGON" => Ok(Species::Ar),
            "HE" | "HELIUM" => Ok(Species::He),
            "AIR" => Ok(Species::Air),
            _ => Err("unknown species"),
        }
    }
}
