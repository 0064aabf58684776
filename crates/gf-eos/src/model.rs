//! EOS capability trait and the per-sample property pack.

use gf_core::Real;

/// Pressure and wave-speed data computed from a single fluid sample.
///
/// Batches the two quantities a flux/CFL loop needs from the same cell into
/// one call, so callers do not recompute the pressure to get at the sound
/// speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EosProperties {
    /// Gas pressure
    pub pres: Real,
    /// Adiabatic sound speed squared
    pub asq: Real,
}

/// Trait for equation-of-state closures.
///
/// Implementations must be thread-safe (`Send + Sync`): the hydro update
/// loop calls these once per cell per stage from any number of worker
/// threads, with no shared mutable state.
///
/// Conversion methods are total over `f64` and never fail or panic. No
/// input validation is performed on the per-cell path; out-of-domain
/// samples (`rho <= 0`, mismatched constants) produce IEEE-defined values
/// that the caller's floors and limiters are expected to handle.
pub trait EosModel: Send + Sync + std::fmt::Debug {
    /// Model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Gas pressure from density and internal (gas) energy density.
    fn pressure_from_density_energy(&self, rho: Real, egas: Real) -> Real;

    /// Internal (gas) energy density from density and pressure.
    ///
    /// Exact algebraic inverse of
    /// [`EosModel::pressure_from_density_energy`] with respect to `egas`;
    /// round-tripping either direction recovers the input to floating-point
    /// precision.
    fn energy_from_density_pressure(&self, rho: Real, pres: Real) -> Real;

    /// Adiabatic sound speed squared from density and pressure.
    ///
    /// The partial derivative of the pressure with respect to density at
    /// fixed cold/thermal energy partition; callers use it to bound
    /// characteristic wave speeds for CFL-limited time stepping and for the
    /// Riemann solver. `rho = 0` divides by zero and is not guarded.
    fn sound_speed_squared(&self, rho: Real, pres: Real) -> Real;

    /// Adiabatic sound speed.
    fn sound_speed(&self, rho: Real, pres: Real) -> Real {
        self.sound_speed_squared(rho, pres).sqrt()
    }

    /// Compute pressure and sound speed squared from one sample in one call.
    fn properties(&self, rho: Real, egas: Real) -> EosProperties {
        let pres = self.pressure_from_density_energy(rho, egas);
        EosProperties {
            pres,
            asq: self.sound_speed_squared(rho, pres),
        }
    }
}
