//! Compare mixture-averaged and unity-Lewis transport for a lean flame mixture.

use std::sync::Arc;

use rf_core::units::{k, kg_per_m3};
use rf_thermo::{GasState, Species, SpeciesSet};
use rf_transport::{TransportModel, TransportModelKind, build_transport_model};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let set = Arc::new(SpeciesSet::new(vec![
        Species::CH4,
        Species::O2,
        Species::N2,
        Species::CO2,
        Species::H2O,
    ])?);

    // Lean methane/air combustion products at flame temperature
    let state = GasState::new(
        set.clone(),
        k(1800.0),
        kg_per_m3(0.19),
        1400.0,
        vec![0.004, 0.04, 0.72, 0.09, 0.146],
    )?;

    println!(
        "state: T = {} K, rho = {} kg/m³, cp = {} J/(kg·K), p = {:.0} Pa",
        state.temperature().value,
        state.density().value,
        state.cp_mass(),
        state.pressure().value,
    );

    for kind in [TransportModelKind::MixtureAveraged, TransportModelKind::UnityLewis] {
        let model = build_transport_model(kind, set.clone())?;
        println!("\n[{}]", model.name());
        println!("  viscosity            = {:.4e} Pa·s", model.viscosity(&state)?.value);
        println!(
            "  thermal conductivity = {:.4e} W/(m·K)",
            model.thermal_conductivity(&state)?.value
        );

        let mut d = vec![0.0; set.n_species()];
        model.mix_diff_coeffs_mass(&state, &mut d)?;
        for (species, coeff) in set.species().iter().zip(&d) {
            println!("  D_mass[{:>3}]          = {:.4e} m²/s", species.key(), coeff);
        }

        match model.mix_diff_coeffs_mole(&state, &mut d) {
            Ok(()) => println!("  mole-only formulation: supported"),
            Err(e) => println!("  mole-only formulation: {e}"),
        }
    }

    Ok(())
}
