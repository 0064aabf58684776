//! Ideal-gas (gamma-law) model.

use crate::error::{EosError, EosResult};
use crate::model::EosModel;
use gf_core::Real;

/// Gamma-law EOS: `P = (gamma - 1) * egas`.
///
/// The density only enters the sound speed, `a^2 = gamma * P / rho`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasEos {
    gamma: Real,
}

impl IdealGasEos {
    /// Create a gamma-law model.
    ///
    /// Rejects non-finite `gamma` and `gamma == 1` (the pressure/energy
    /// conversion divides by `gamma - 1`).
    pub fn new(gamma: Real) -> EosResult<Self> {
        if !gamma.is_finite() {
            return Err(EosError::NonPhysical {
                what: "gamma must be finite",
            });
        }
        if gamma == 1.0 {
            return Err(EosError::InvalidArg {
                what: "gamma must differ from 1",
            });
        }
        Ok(Self { gamma })
    }

    /// Adiabatic index.
    pub fn gamma(&self) -> Real {
        self.gamma
    }
}

impl EosModel for IdealGasEos {
    fn name(&self) -> &str {
        "ideal_gas"
    }

    fn pressure_from_density_energy(&self, _rho: Real, egas: Real) -> Real {
        egas * (self.gamma - 1.0)
    }

    fn energy_from_density_pressure(&self, _rho: Real, pres: Real) -> Real {
        pres / (self.gamma - 1.0)
    }

    fn sound_speed_squared(&self, rho: Real, pres: Real) -> Real {
        self.gamma * pres / rho
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::{Tolerances, nearly_equal};

    #[test]
    fn gamma_law_conversions() {
        let eos = IdealGasEos::new(1.4).unwrap();
        let tol = Tolerances::default();

        // P = 0.4 * 2.5 = 1
        let pres = eos.pressure_from_density_energy(1.0, 2.5);
        assert!(nearly_equal(pres, 1.0, tol));
        assert!(nearly_equal(
            eos.energy_from_density_pressure(1.0, pres),
            2.5,
            tol
        ));
        assert!(nearly_equal(eos.sound_speed_squared(1.0, pres), 1.4, tol));
    }

    #[test]
    fn density_does_not_enter_pressure() {
        let eos = IdealGasEos::new(1.4).unwrap();
        let p1 = eos.pressure_from_density_energy(0.1, 3.0);
        let p2 = eos.pressure_from_density_energy(100.0, 3.0);
        assert_eq!(p1, p2);
    }

    #[test]
    fn default_properties_pack() {
        let eos = IdealGasEos::new(1.4).unwrap();
        let pack = eos.properties(0.5, 2.0);
        assert_eq!(pack.pres, eos.pressure_from_density_energy(0.5, 2.0));
        assert_eq!(pack.asq, eos.sound_speed_squared(0.5, pack.pres));
        let a = eos.sound_speed(0.5, pack.pres);
        assert!(nearly_equal(a * a, pack.asq, Tolerances::default()));
    }

    #[test]
    fn reject_degenerate_gamma() {
        assert!(IdealGasEos::new(1.0).is_err());
        assert!(IdealGasEos::new(Real::NAN).is_err());
        assert!(IdealGasEos::new(Real::INFINITY).is_err());
    }
}
