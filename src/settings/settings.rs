use super::{LinsysSolver, SettingsError};
use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Configuration of an ADMM quadratic program solver.
///
/// Every field is a plain scalar, so a `Settings` value is `Copy` and a
/// copy never shares storage with its source.  Use
/// [`Settings::defaults`] or the [`SettingsBuilder`] to construct one:
///
/// ```
/// use qpkit::settings::*;
///
/// let settings: Settings<f64> = SettingsBuilder::default()
///     .max_iter(100)
///     .polish(true)
///     .build()
///     .unwrap();
/// assert_eq!(settings.max_iter, 100);
/// ```

#[derive(Builder, Debug, Clone, Copy, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings<T: FloatT> {
    ///heuristic problem scaling
    #[builder(default = "true")]
    pub scaling: bool,

    ///scaling norm (1, 2, or -1 for the infinity norm)
    #[builder(default = "-1")]
    pub scaling_norm: i32,

    ///adaptive step size selection
    #[builder(default = "true")]
    pub adaptive_rho: bool,

    ///iterations between step size updates.  0 selects automatically
    #[builder(default = "0")]
    pub adaptive_rho_interval: u32,

    ///ADMM step size
    #[builder(default = "(0.1).as_T()")]
    pub rho: T,

    ///ADMM step size
    #[builder(default = "(1e-6).as_T()")]
    pub sigma: T,

    ///relaxation parameter
    #[builder(default = "(1.6).as_T()")]
    pub alpha: T,

    ///maximum number of iterations
    #[builder(default = "4000")]
    pub max_iter: u32,

    ///absolute convergence tolerance
    #[builder(default = "(1e-3).as_T()")]
    pub eps_abs: T,

    ///relative convergence tolerance
    #[builder(default = "(1e-3).as_T()")]
    pub eps_rel: T,

    ///primal infeasibility tolerance
    #[builder(default = "(1e-4).as_T()")]
    pub eps_prim_inf: T,

    ///dual infeasibility tolerance
    #[builder(default = "(1e-4).as_T()")]
    pub eps_dual_inf: T,

    ///linear system solver
    #[builder(default = "LinsysSolver::default()")]
    pub linsys_solver: LinsysSolver,

    ///polishing regularization
    #[builder(default = "(1e-6).as_T()")]
    pub delta: T,

    ///solution polishing
    #[builder(default = "false")]
    pub polish: bool,

    ///iterative refinement steps in polishing
    #[builder(default = "3")]
    pub polish_refine_iter: u32,

    ///verbose printing
    #[builder(default = "true")]
    pub verbose: bool,

    ///evaluate termination criteria on the scaled problem
    #[builder(default = "false")]
    pub scaled_termination: bool,

    ///iterations between termination checks.  0 disables the checks
    #[builder(default = "25")]
    pub check_termination: u32,

    ///warm starting
    #[builder(default = "true")]
    pub warm_start: bool,
}

impl<T> Default for Settings<T>
where
    T: FloatT,
{
    fn default() -> Settings<T> {
        SettingsBuilder::<T>::default().build().unwrap()
    }
}

macro_rules! check_immutable_setting {
    ($self:expr, $prev:expr, $field:ident) => {
        if $self.$field != $prev.$field {
            return Err(SettingsError::ImmutableSetting(stringify!($field)));
        }
    };
}

impl<T> Settings<T>
where
    T: FloatT,
{
    /// Settings populated with the compiled-in defaults
    pub fn defaults() -> Self {
        Self::default()
    }

    /// An independent copy of these settings.
    pub fn snapshot(&self) -> Self {
        *self
    }

    /// True if `scaling_norm` selects the infinity norm
    pub fn scaling_norm_is_inf(&self) -> bool {
        self.scaling_norm == -1
    }

    /// Checks that every field holds a legal value.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_scaling_norm(self.scaling_norm)?;
        validate_positive(self.rho, "rho")?;
        validate_positive(self.sigma, "sigma")?;
        validate_alpha(self.alpha)?;
        validate_max_iter(self.max_iter)?;
        validate_nonnegative(self.eps_abs, "eps_abs")?;
        validate_nonnegative(self.eps_rel, "eps_rel")?;
        validate_nonnegative(self.eps_prim_inf, "eps_prim_inf")?;
        validate_nonnegative(self.eps_dual_inf, "eps_dual_inf")?;
        validate_positive(self.delta, "delta")?;

        if self.eps_abs == T::zero() && self.eps_rel == T::zero() {
            return Err(SettingsError::BadFieldValue("eps_abs"));
        }
        Ok(())
    }

    /// check that a settings object is valid as an updated collection
    /// of settings for a solver that has already been set up.   This
    /// rejects changes to parameters that are only applicable during
    /// solver setup.  Calls `validate()` internally to check
    /// that values are also legal.
    pub fn validate_as_update(&self, prev: &Self) -> Result<(), SettingsError> {
        self.validate()?;

        check_immutable_setting!(self, prev, scaling);
        check_immutable_setting!(self, prev, scaling_norm);
        check_immutable_setting!(self, prev, adaptive_rho);
        check_immutable_setting!(self, prev, adaptive_rho_interval);
        check_immutable_setting!(self, prev, sigma);
        check_immutable_setting!(self, prev, linsys_solver);

        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> SettingsBuilder<T>
where
    T: FloatT,
{
    /// check any explicitly assigned fields for legal values
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(scaling_norm) = self.scaling_norm {
            validate_scaling_norm(scaling_norm)?;
        }
        if let Some(rho) = self.rho {
            validate_positive(rho, "rho")?;
        }
        if let Some(sigma) = self.sigma {
            validate_positive(sigma, "sigma")?;
        }
        if let Some(alpha) = self.alpha {
            validate_alpha(alpha)?;
        }
        if let Some(max_iter) = self.max_iter {
            validate_max_iter(max_iter)?;
        }
        if let Some(delta) = self.delta {
            validate_positive(delta, "delta")?;
        }

        let tolerances = [
            (self.eps_abs, "eps_abs"),
            (self.eps_rel, "eps_rel"),
            (self.eps_prim_inf, "eps_prim_inf"),
            (self.eps_dual_inf, "eps_dual_inf"),
        ];
        for (eps, name) in tolerances {
            if let Some(eps) = eps {
                validate_nonnegative(eps, name)?;
            }
        }
        if self.eps_abs == Some(T::zero()) && self.eps_rel == Some(T::zero()) {
            return Err(SettingsError::BadFieldValue("eps_abs"));
        }

        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_scaling_norm(scaling_norm: i32) -> Result<(), SettingsError> {
    match scaling_norm {
        1 | 2 | -1 => Ok(()),
        _ => Err(SettingsError::BadFieldValue("scaling_norm")),
    }
}

fn validate_alpha<T: FloatT>(alpha: T) -> Result<(), SettingsError> {
    if alpha > T::zero() && alpha < (2.0).as_T() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("alpha"))
    }
}

fn validate_max_iter(max_iter: u32) -> Result<(), SettingsError> {
    if max_iter > 0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("max_iter"))
    }
}

// NaN fails both of these
fn validate_positive<T: FloatT>(x: T, field: &'static str) -> Result<(), SettingsError> {
    if x > T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

fn validate_nonnegative<T: FloatT>(x: T, field: &'static str) -> Result<(), SettingsError> {
    if x >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    SettingsBuilder::<f64>::default().build().unwrap();
    assert!(Settings::<f64>::defaults().validate().is_ok());

    // fail on out of range values
    assert!(SettingsBuilder::<f64>::default()
        .alpha(2.0)
        .build()
        .is_err());
    assert!(SettingsBuilder::<f64>::default()
        .scaling_norm(3)
        .build()
        .is_err());
    assert!(SettingsBuilder::<f64>::default()
        .eps_abs(0.0)
        .eps_rel(0.0)
        .build()
        .is_err());
    assert!(SettingsBuilder::<f64>::default()
        .rho(f64::NAN)
        .build()
        .is_err());

    // one zero tolerance is fine
    assert!(SettingsBuilder::<f64>::default()
        .eps_abs(0.0)
        .build()
        .is_ok());

    // directly construct a bad Settings and manually check
    let settings = Settings::<f64> {
        max_iter: 0,
        ..Settings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("max_iter"))
    );

    // try to overlay prohibited update values
    let oldsettings = Settings::<f64> {
        sigma: 1e-5,
        ..Settings::default()
    };
    let newsettings = Settings::<f64>::default();
    assert_eq!(
        newsettings.validate_as_update(&oldsettings),
        Err(SettingsError::ImmutableSetting("sigma"))
    );

    // try to overlay allowed update values
    let oldsettings = Settings::<f64> {
        max_iter: 10,
        ..Settings::default()
    };

    let newsettings = Settings::<f64> {
        max_iter: 11,
        rho: 0.2,
        ..Settings::default()
    };
    assert!(newsettings.validate_as_update(&oldsettings).is_ok());
}
