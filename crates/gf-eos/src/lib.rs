//! gf-eos: equation-of-state closures for gammaflow.
//!
//! Provides:
//! - `EosModel` trait: the narrow interface the hydro update loop calls
//!   once per cell per stage
//! - Composite cold-polytrope + thermal gamma-law model
//! - Ideal-gas (gamma-law) model
//! - `EosSpec` configuration enum and the `build_eos` factory
//!
//! # Architecture
//!
//! This crate defines a stable API (`EosModel` trait) that isolates the
//! hosting solver from the thermodynamic model in use. The model is chosen
//! from configuration at startup via `build_eos`; after that the solver only
//! sees trait methods taking and returning plain `f64` scalars in code
//! units. Conversions on the per-cell path are total, infallible, and
//! lock-free; only model construction can fail.
//!
//! # Example
//!
//! ```
//! use gf_eos::{EosModel, EosSpec, build_eos};
//!
//! let eos = build_eos(&EosSpec::default()).unwrap();
//! let pres = eos.pressure_from_density_energy(1.0, 1.0);
//! let egas = eos.energy_from_density_pressure(1.0, pres);
//! assert!((egas - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod ideal;
pub mod model;
pub mod polytropic;

// Re-exports for ergonomics
pub use config::{EosSpec, build_eos};
pub use constants::PolytropicConstants;
pub use error::{EosError, EosResult};
pub use ideal::IdealGasEos;
pub use model::{EosModel, EosProperties};
pub use polytropic::PolytropicThermalEos;
