//! Composite cold-polytrope + thermal gamma-law model.

use crate::constants::PolytropicConstants;
use crate::model::EosModel;
use gf_core::Real;

/// Piecewise-polytropic EOS with a gamma-law thermal component.
///
/// The pressure decomposes as a cold polytrope `k_c * rho^gamma_c`, scaled
/// by the correction factor that makes the cold and thermal energy
/// partitions agree at the reference state, plus an ideal-gas-law thermal
/// contribution `(gamma_th - 1) * egas`. One polytropic segment for now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolytropicThermalEos {
    constants: PolytropicConstants,
}

impl PolytropicThermalEos {
    /// Wrap an initialized constants record.
    pub fn new(constants: PolytropicConstants) -> Self {
        Self { constants }
    }

    /// Read access to the constants record.
    pub fn constants(&self) -> &PolytropicConstants {
        &self.constants
    }
}

impl EosModel for PolytropicThermalEos {
    fn name(&self) -> &str {
        "polytropic_thermal"
    }

    fn pressure_from_density_energy(&self, rho: Real, egas: Real) -> Real {
        let c = &self.constants;
        c.cold_pressure(rho) + egas * (c.gamma_th() - 1.0)
    }

    fn energy_from_density_pressure(&self, rho: Real, pres: Real) -> Real {
        let c = &self.constants;
        (pres - c.cold_pressure(rho)) / (c.gamma_th() - 1.0)
    }

    fn sound_speed_squared(&self, rho: Real, pres: Real) -> Real {
        let c = &self.constants;
        c.gamma_th() * pres / rho
            + c.k_c() * (c.gamma_c() - c.gamma_th()) * rho.powf(c.gamma_c() - 1.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn reference_eos() -> PolytropicThermalEos {
        PolytropicThermalEos::new(PolytropicConstants::new(1.0, 1.4, 1.8).unwrap())
    }

    proptest! {
        #[test]
        fn round_trip_recovers_energy(
            rho in 1e-3_f64..1e3_f64,
            egas in 0.0_f64..1e6_f64,
        ) {
            let eos = reference_eos();
            let pres = eos.pressure_from_density_energy(rho, egas);
            let back = eos.energy_from_density_pressure(rho, pres);
            // cancellation against the cold term bounds the achievable
            // absolute accuracy, so scale the tolerance with both inputs
            let tol = 1e-12 * (1.0 + egas.abs() + pres.abs());
            prop_assert!((back - egas).abs() <= tol, "egas = {}, back = {}", egas, back);
        }

        #[test]
        fn round_trip_recovers_pressure(
            rho in 1e-3_f64..1e3_f64,
            pres in -1e4_f64..1e6_f64,
        ) {
            let eos = reference_eos();
            let egas = eos.energy_from_density_pressure(rho, pres);
            let back = eos.pressure_from_density_energy(rho, egas);
            let tol = 1e-12 * (1.0 + pres.abs() + egas.abs());
            prop_assert!((back - pres).abs() <= tol, "pres = {}, back = {}", pres, back);
        }

        #[test]
        fn pressure_is_monotone_in_energy(
            rho in 1e-3_f64..1e3_f64,
            egas in 0.0_f64..1e6_f64,
            de in 0.0_f64..1e6_f64,
        ) {
            let eos = reference_eos();
            let lo = eos.pressure_from_density_energy(rho, egas);
            let hi = eos.pressure_from_density_energy(rho, egas + de);
            prop_assert!(hi >= lo);
        }
    }
}
