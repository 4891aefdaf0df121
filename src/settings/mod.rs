//! Solver settings with compiled-in defaults.
//!
//! [`Settings`] always carries every option.  Builds for small embedded
//! targets work with the [`ReducedSettings`] subset instead, which
//! converts to and from the full record.

use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[allow(clippy::module_inception)]
mod settings;
pub use settings::*;
mod reduced;
pub use reduced::*;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds an illegal value
    #[error("Bad value for field {0}")]
    BadFieldValue(&'static str),
    /// A field that is fixed at setup time was changed
    #[error("Setting {0} cannot be changed after setup")]
    ImmutableSetting(&'static str),
    /// A linear system solver name was not recognised
    #[error("Unknown linear system solver \"{0}\"")]
    UnknownLinsysSolver(String),
}

/// Linear system backend used by the solver for its KKT systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinsysSolver {
    /// built-in sparse LDL factorization
    #[default]
    Qdldl,
    /// Intel MKL Pardiso
    MklPardiso,
}

impl LinsysSolver {
    /// Name of the backend as reported in solver output
    pub fn name(&self) -> &'static str {
        match self {
            LinsysSolver::Qdldl => "qdldl",
            LinsysSolver::MklPardiso => "mkl pardiso",
        }
    }
}

impl std::fmt::Display for LinsysSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LinsysSolver {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qdldl" => Ok(LinsysSolver::Qdldl),
            "mkl pardiso" | "mkl_pardiso" | "pardiso" => Ok(LinsysSolver::MklPardiso),
            _ => Err(SettingsError::UnknownLinsysSolver(s.to_string())),
        }
    }
}

#[test]
fn test_linsys_solver_names() {
    for solver in [LinsysSolver::Qdldl, LinsysSolver::MklPardiso] {
        assert_eq!(solver.name().parse::<LinsysSolver>(), Ok(solver));
    }
    assert_eq!("Pardiso".parse(), Ok(LinsysSolver::MklPardiso));
    assert!(matches!(
        "cholmod".parse::<LinsysSolver>(),
        Err(SettingsError::UnknownLinsysSolver(_))
    ));
}
