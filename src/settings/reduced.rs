use super::{LinsysSolver, Settings};
use crate::algebra::FloatT;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The subset of [`Settings`] available to reduced-footprint embedded
/// builds.
///
/// Scaling norm, step size adaptation, polishing and verbosity options
/// are absent.  Those builds run with the defaults of the missing fields,
/// which is what [`Settings::from_reduced`] fills in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct ReducedSettings<T: FloatT> {
    pub scaling: bool,
    pub rho: T,
    pub sigma: T,
    pub max_iter: u32,
    pub eps_abs: T,
    pub eps_rel: T,
    pub eps_prim_inf: T,
    pub eps_dual_inf: T,
    pub alpha: T,
    pub linsys_solver: LinsysSolver,
    pub scaled_termination: bool,
    pub check_termination: u32,
    pub warm_start: bool,
}

impl<T: FloatT> Default for ReducedSettings<T> {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl<T: FloatT> From<&Settings<T>> for ReducedSettings<T> {
    fn from(s: &Settings<T>) -> Self {
        Self {
            scaling: s.scaling,
            rho: s.rho,
            sigma: s.sigma,
            max_iter: s.max_iter,
            eps_abs: s.eps_abs,
            eps_rel: s.eps_rel,
            eps_prim_inf: s.eps_prim_inf,
            eps_dual_inf: s.eps_dual_inf,
            alpha: s.alpha,
            linsys_solver: s.linsys_solver,
            scaled_termination: s.scaled_termination,
            check_termination: s.check_termination,
            warm_start: s.warm_start,
        }
    }
}

impl<T: FloatT> Settings<T> {
    /// Full settings built from a reduced profile, with defaults for
    /// every field the profile omits
    pub fn from_reduced(r: &ReducedSettings<T>) -> Self {
        Self {
            scaling: r.scaling,
            rho: r.rho,
            sigma: r.sigma,
            max_iter: r.max_iter,
            eps_abs: r.eps_abs,
            eps_rel: r.eps_rel,
            eps_prim_inf: r.eps_prim_inf,
            eps_dual_inf: r.eps_dual_inf,
            alpha: r.alpha,
            linsys_solver: r.linsys_solver,
            scaled_termination: r.scaled_termination,
            check_termination: r.check_termination,
            warm_start: r.warm_start,
            ..Settings::default()
        }
    }

    /// The reduced profile of these settings
    pub fn reduced(&self) -> ReducedSettings<T> {
        ReducedSettings::from(self)
    }
}

#[test]
fn test_reduced_profile() {
    let full = Settings::<f64> {
        rho: 0.5,
        polish: true,
        verbose: false,
        ..Settings::default()
    };

    let reduced = full.reduced();
    assert_eq!(reduced.rho, 0.5);

    // fields outside the profile fall back to defaults
    let restored = Settings::from_reduced(&reduced);
    assert_eq!(restored.rho, 0.5);
    assert!(!restored.polish);
    assert!(restored.verbose);
    assert_eq!(restored.reduced(), reduced);

    assert_eq!(
        Settings::from_reduced(&ReducedSettings::<f64>::default()),
        Settings::default()
    );
}
