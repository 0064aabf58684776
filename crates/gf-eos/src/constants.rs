//! Model constants for the composite polytropic + thermal closure.

use crate::error::{EosError, EosResult};
use gf_core::Real;

/// Immutable parameter record for the polytropic + thermal model.
///
/// Holds the polytropic normalization `k_c`, the cold-branch adiabatic index
/// `gamma_c`, and the thermal adiabatic index `gamma_th`, read once from
/// configuration at solver setup. The cold-term correction factor
/// `1 - (gamma_th - 1) / (gamma_c - 1)` is derived here and cached so every
/// formula reads bitwise the same value; the pressure/energy round-trip
/// contract depends on the forward and inverse directions agreeing on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolytropicConstants {
    k_c: Real,
    gamma_c: Real,
    gamma_th: Real,
    /// Cached `1 - (gamma_th - 1) / (gamma_c - 1)`.
    cold_factor: Real,
}

impl PolytropicConstants {
    /// Create a constants record.
    ///
    /// Rejects values the formulas cannot represent: non-finite parameters,
    /// `gamma_c == 1` (the correction factor divides by `gamma_c - 1`), and
    /// `gamma_th == 1` (the energy inversion divides by `gamma_th - 1`).
    /// Indices are otherwise accepted as given; physical plausibility
    /// (`gamma > 1`) is the host's call.
    pub fn new(k_c: Real, gamma_c: Real, gamma_th: Real) -> EosResult<Self> {
        if !k_c.is_finite() {
            return Err(EosError::NonPhysical {
                what: "k_c must be finite",
            });
        }
        if !gamma_c.is_finite() {
            return Err(EosError::NonPhysical {
                what: "gamma_c must be finite",
            });
        }
        if !gamma_th.is_finite() {
            return Err(EosError::NonPhysical {
                what: "gamma_th must be finite",
            });
        }
        if gamma_c == 1.0 {
            return Err(EosError::InvalidArg {
                what: "gamma_c must differ from 1",
            });
        }
        if gamma_th == 1.0 {
            return Err(EosError::InvalidArg {
                what: "gamma_th must differ from 1",
            });
        }

        let cold_factor = 1.0 - (gamma_th - 1.0) / (gamma_c - 1.0);
        Ok(Self {
            k_c,
            gamma_c,
            gamma_th,
            cold_factor,
        })
    }

    /// Polytropic normalization.
    pub fn k_c(&self) -> Real {
        self.k_c
    }

    /// Cold-branch adiabatic index.
    pub fn gamma_c(&self) -> Real {
        self.gamma_c
    }

    /// Thermal adiabatic index.
    pub fn gamma_th(&self) -> Real {
        self.gamma_th
    }

    /// Cold-term correction factor `1 - (gamma_th - 1) / (gamma_c - 1)`.
    pub fn cold_factor(&self) -> Real {
        self.cold_factor
    }

    /// Cold (zero thermal energy) pressure at `rho`:
    /// `k_c * rho^gamma_c * cold_factor`.
    ///
    /// Shared by both conversion directions so the inverse subtracts exactly
    /// the term the forward direction added.
    #[inline]
    pub fn cold_pressure(&self, rho: Real) -> Real {
        self.k_c * rho.powf(self.gamma_c) * self.cold_factor
    }
}
