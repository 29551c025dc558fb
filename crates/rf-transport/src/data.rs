//! Per-species transport-parameter catalog.
//!
//! Correlation constants for the mixture-averaged backend: Sutherland-form
//! viscosity and thermal conductivity pairs plus Fuller diffusion volumes.
//! Values are standard handbook fits; they are catalog data, not algorithm.

use rf_thermo::Species;

/// Sutherland reference temperature [K].
pub const T_REF: f64 = 273.15;

/// Correlation parameters for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportParams {
    /// Reference viscosity [Pa·s] at `T_REF`
    pub mu_ref: f64,
    /// Sutherland constant for viscosity [K]
    pub s_visc: f64,
    /// Reference thermal conductivity [W/(m·K)] at `T_REF`
    pub lambda_ref: f64,
    /// Sutherland constant for conductivity [K]
    pub s_cond: f64,
    /// Fuller diffusion volume (dimensionless)
    pub diff_vol: f64,
}

/// Sutherland-form temperature correlation:
///
/// ```text
/// f(T) = f_ref · (T/T_ref)^(3/2) · (T_ref + S) / (T + S)
/// ```
pub fn sutherland(f_ref: f64, s: f64, t: f64) -> f64 {
    f_ref * (t / T_REF).powf(1.5) * (T_REF + s) / (t + s)
}

/// Look up catalog parameters for a species.
///
/// Returns `None` for species the catalog does not cover.
pub fn params_for(species: Species) -> Option<TransportParams> {
    let params = match species {
        Species::O2 => TransportParams {
            mu_ref: 1.919e-5,
            s_visc: 139.0,
            lambda_ref: 0.0244,
            s_cond: 240.0,
            diff_vol: 16.3,
        },
        Species::N2 => TransportParams {
            mu_ref: 1.663e-5,
            s_visc: 107.0,
            lambda_ref: 0.0242,
            s_cond: 150.0,
            diff_vol: 18.5,
        },
        Species::H2 => TransportParams {
            mu_ref: 8.411e-6,
            s_visc: 97.0,
            lambda_ref: 0.168,
            s_cond: 120.0,
            diff_vol: 6.12,
        },
        Species::H2O => TransportParams {
            mu_ref: 8.9e-6,
            s_visc: 1064.0,
            lambda_ref: 0.0163,
            s_cond: 2200.0,
            diff_vol: 13.1,
        },
        Species::CH4 => TransportParams {
            mu_ref: 1.024e-5,
            s_visc: 169.0,
            lambda_ref: 0.0302,
            s_cond: 197.0,
            diff_vol: 24.42,
        },
        Species::CO => TransportParams {
            mu_ref: 1.657e-5,
            s_visc: 136.0,
            lambda_ref: 0.0232,
            s_cond: 180.0,
            diff_vol: 18.0,
        },
        Species::CO2 => TransportParams {
            mu_ref: 1.370e-5,
            s_visc: 222.0,
            lambda_ref: 0.0146,
            s_cond: 1800.0,
            diff_vol: 26.9,
        },
        Species::Ammonia => TransportParams {
            mu_ref: 9.2e-6,
            s_visc: 370.0,
            lambda_ref: 0.0218,
            s_cond: 390.0,
            diff_vol: 14.9,
        },
        Species::Ar => TransportParams {
            mu_ref: 2.125e-5,
            s_visc: 144.0,
            lambda_ref: 0.0163,
            s_cond: 170.0,
            diff_vol: 16.2,
        },
        Species::He => TransportParams {
            mu_ref: 1.865e-5,
            s_visc: 79.4,
            lambda_ref: 0.1513,
            s_cond: 79.4,
            diff_vol: 2.67,
        },
        Species::Air => TransportParams {
            mu_ref: 1.716e-5,
            s_visc: 111.0,
            lambda_ref: 0.0241,
            s_cond: 194.0,
            diff_vol: 19.7,
        },
    };
    Some(params)
}
