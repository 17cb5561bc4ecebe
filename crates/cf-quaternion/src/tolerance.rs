//! Comparison tolerances.
//!
//! [`Tolerances`] bundles the thresholds used by the approximate predicates
//! on [`Quaternion`] so callers can pick them once and pass them around.

use crate::Quaternion;

/// Default tolerance for all comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-14;

/// Tolerances for approximate quaternion comparisons.
///
/// All comparisons are non-strict (`<=`). A negative or `NaN` tolerance
/// makes every comparison fail.
///
/// # Example
///
/// ```
/// use cf_quaternion::{Quaternion, Tolerances};
///
/// let tol = Tolerances::default().with_equality(1e-6);
/// let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
/// let b = Quaternion::new(1.0, 2.0, 3.0, 4.0 + 1e-9);
///
/// assert!(tol.equal(&a, &b));
/// assert!(!Tolerances::exact().equal(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Maximum `|norm - 1|` for a unit quaternion.
    pub unit: f64,
    /// Maximum `|q0|` for a pure quaternion.
    pub pure: f64,
    /// Maximum per-component difference for tolerance equality.
    pub equality: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            unit: DEFAULT_TOLERANCE,
            pure: DEFAULT_TOLERANCE,
            equality: DEFAULT_TOLERANCE,
        }
    }
}

impl Tolerances {
    /// Machine epsilon (`ulp(1.0)`) for every comparison.
    #[must_use]
    pub const fn machine() -> Self {
        Self {
            unit: f64::EPSILON,
            pure: f64::EPSILON,
            equality: f64::EPSILON,
        }
    }

    /// Zero tolerance: only exact matches pass.
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            unit: 0.0,
            pure: 0.0,
            equality: 0.0,
        }
    }

    /// Sets the unit-norm tolerance.
    #[must_use]
    pub const fn with_unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the pure-quaternion tolerance.
    #[must_use]
    pub const fn with_pure(mut self, pure: f64) -> Self {
        self.pure = pure;
        self
    }

    /// Sets the component equality tolerance.
    #[must_use]
    pub const fn with_equality(mut self, equality: f64) -> Self {
        self.equality = equality;
        self
    }

    /// See [`Quaternion::is_unit_quaternion`].
    #[must_use]
    pub fn is_unit(&self, q: &Quaternion) -> bool {
        q.is_unit_quaternion(self.unit)
    }

    /// See [`Quaternion::is_pure_quaternion`].
    #[must_use]
    pub fn is_pure(&self, q: &Quaternion) -> bool {
        q.is_pure_quaternion(self.pure)
    }

    /// See [`Quaternion::equals_within`].
    #[must_use]
    pub fn equal(&self, a: &Quaternion, b: &Quaternion) -> bool {
        a.equals_within(b, self.equality)
    }
}
