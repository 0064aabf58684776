//! EOS setup errors.

use gf_core::GfError;
use thiserror::Error;

/// Result type for EOS construction.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while building an EOS model from configuration.
///
/// Per-cell conversions are infallible by contract and never produce these;
/// only the setup path (reading configuration, constructing the constants
/// record) is fallible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Non-physical parameter value (non-finite).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Parameter value the formulas cannot represent.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<EosError> for GfError {
    fn from(err: EosError) -> Self {
        match err {
            EosError::NonPhysical { what } => GfError::Invariant { what },
            EosError::InvalidArg { what } => GfError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::NonPhysical {
            what: "gamma_th must be finite",
        };
        assert!(err.to_string().contains("gamma_th"));
    }

    #[test]
    fn error_to_gf_error() {
        let eos_err = EosError::InvalidArg {
            what: "gamma_c must differ from 1",
        };
        let gf_err: GfError = eos_err.into();
        assert!(matches!(gf_err, GfError::InvalidArg { .. }));
    }
}
