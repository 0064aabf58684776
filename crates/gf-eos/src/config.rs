//! EOS selection and configuration.

use crate::constants::PolytropicConstants;
use crate::error::EosResult;
use crate::ideal::IdealGasEos;
use crate::model::EosModel;
use crate::polytropic::PolytropicThermalEos;
use serde::{Deserialize, Serialize};

/// EOS model selection, as the host's configuration names it.
///
/// The host hands one of these to [`build_eos`] at solver setup; the module
/// does no configuration parsing of its own beyond reading the named scalar
/// parameters. Omitted fields fall back to the historical compiled-in
/// values (`k_c = 1`, `gamma_c = 1.4`, `gamma_th = 1.8`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EosSpec {
    /// Gamma-law ideal gas.
    IdealGas {
        #[serde(default = "default_gamma")]
        gamma: f64,
    },
    /// Cold polytrope plus gamma-law thermal component.
    PolytropicThermal {
        #[serde(default = "default_k_c")]
        k_c: f64,
        #[serde(default = "default_gamma_c")]
        gamma_c: f64,
        #[serde(default = "default_gamma_th")]
        gamma_th: f64,
    },
}

fn default_gamma() -> f64 {
    1.4
}

fn default_k_c() -> f64 {
    1.0
}

fn default_gamma_c() -> f64 {
    1.4
}

fn default_gamma_th() -> f64 {
    1.8
}

impl Default for EosSpec {
    fn default() -> Self {
        EosSpec::PolytropicThermal {
            k_c: default_k_c(),
            gamma_c: default_gamma_c(),
            gamma_th: default_gamma_th(),
        }
    }
}

/// Build a ready EOS model from a configuration spec.
///
/// Reads the named scalar parameters once, validates them, and constructs
/// the selected variant; the returned model performs no further validation
/// on the per-cell path. Building repeatedly from equal specs yields models
/// with identical outputs.
pub fn build_eos(spec: &EosSpec) -> EosResult<Box<dyn EosModel>> {
    let model: Box<dyn EosModel> = match *spec {
        EosSpec::IdealGas { gamma } => Box::new(IdealGasEos::new(gamma)?),
        EosSpec::PolytropicThermal {
            k_c,
            gamma_c,
            gamma_th,
        } => Box::new(PolytropicThermalEos::new(PolytropicConstants::new(
            k_c, gamma_c, gamma_th,
        )?)),
    };
    tracing::debug!(model = model.name(), "constructed EOS model");
    Ok(model)
}
