//! The quaternion value type.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector3;

use crate::error::{QuaternionError, QuaternionResult, check_dimension};

/// A real quaternion `q0 + q1·i + q2·j + q3·k`.
///
/// `q0` is the scalar part and `(q1, q2, q3)` the vector part. Components
/// are fixed at construction; every operation returns a new value.
///
/// # Equality
///
/// `==` compares components with IEEE semantics, so `NaN` components never
/// compare equal and `0.0 == -0.0`. Use [`Quaternion::equals_within`] (or the
/// `approx` traits) for tolerance comparisons.
///
/// # Example
///
/// ```
/// use cf_quaternion::Quaternion;
///
/// let q = Quaternion::new(1.0, 0.5, -3.0, 4.0);
/// assert_eq!(q.scalar_part(), 1.0);
/// assert_eq!(q.vector_part(), [0.5, -3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    q0: f64,
    q1: f64,
    q2: f64,
    q3: f64,
}

impl Quaternion {
    /// The additive identity `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The multiplicative identity `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The basis element `i = (0, 1, 0, 0)`.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The basis element `j = (0, 0, 1, 0)`.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// The basis element `k = (0, 0, 0, 1)`.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its four components, taken verbatim.
    #[must_use]
    pub const fn new(q0: f64, q1: f64, q2: f64, q3: f64) -> Self {
        Self { q0, q1, q2, q3 }
    }

    /// Creates a quaternion from a scalar part and a vector part.
    #[must_use]
    pub const fn from_parts(scalar: f64, [q1, q2, q3]: [f64; 3]) -> Self {
        Self::new(scalar, q1, q2, q3)
    }

    /// Creates a pure quaternion (zero scalar part) from a vector.
    #[must_use]
    pub const fn pure(vector: [f64; 3]) -> Self {
        Self::from_parts(0.0, vector)
    }

    /// Creates a quaternion from a scalar part and a vector part slice.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DimensionMismatch`] unless `vector` has
    /// exactly 3 elements.
    ///
    /// # Example
    ///
    /// ```
    /// use cf_quaternion::Quaternion;
    ///
    /// let q = Quaternion::from_scalar_and_vector(2.0, &[5.4, 17.0, 0.0005])?;
    /// assert_eq!(q, Quaternion::new(2.0, 5.4, 17.0, 0.0005));
    ///
    /// assert!(Quaternion::from_scalar_and_vector(2.0, &[1.0, 2.0]).is_err());
    /// # Ok::<(), cf_quaternion::QuaternionError>(())
    /// ```
    pub fn from_scalar_and_vector(scalar: f64, vector: &[f64]) -> QuaternionResult<Self> {
        check_dimension(3, vector.len())?;
        Ok(Self::new(scalar, vector[0], vector[1], vector[2]))
    }

    /// Creates a pure quaternion from a vector slice.
    ///
    /// This is the way to multiply a quaternion by a 3-vector: wrap the
    /// vector and use the ordinary Hamilton product.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DimensionMismatch`] unless `vector` has
    /// exactly 3 elements.
    pub fn from_vector(vector: &[f64]) -> QuaternionResult<Self> {
        Self::from_scalar_and_vector(0.0, vector)
    }

    /// Creates a quaternion from a slice of its four components.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DimensionMismatch`] unless `components`
    /// has exactly 4 elements.
    pub fn from_slice(components: &[f64]) -> QuaternionResult<Self> {
        check_dimension(4, components.len())?;
        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }

    /// First component (scalar part).
    #[must_use]
    pub const fn q0(&self) -> f64 {
        self.q0
    }

    /// Second component (first vector component).
    #[must_use]
    pub const fn q1(&self) -> f64 {
        self.q1
    }

    /// Third component (second vector component).
    #[must_use]
    pub const fn q2(&self) -> f64 {
        self.q2
    }

    /// Fourth component (third vector component).
    #[must_use]
    pub const fn q3(&self) -> f64 {
        self.q3
    }

    /// The scalar part `q0`.
    #[must_use]
    pub const fn scalar_part(&self) -> f64 {
        self.q0
    }

    /// The vector part `[q1, q2, q3]` as a fresh array.
    #[must_use]
    pub const fn vector_part(&self) -> [f64; 3] {
        [self.q1, self.q2, self.q3]
    }

    /// The vector part as an nalgebra vector.
    #[must_use]
    pub fn vector3(&self) -> Vector3<f64> {
        Vector3::new(self.q1, self.q2, self.q3)
    }

    /// All four components `[q0, q1, q2, q3]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.q0, self.q1, self.q2, self.q3]
    }

    /// The conjugate `(q0, -q1, -q2, -q3)`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.q0, -self.q1, -self.q2, -self.q3)
    }

    /// Multiplies every component by `alpha`.
    #[must_use]
    pub fn scale(&self, alpha: f64) -> Self {
        Self::new(
            alpha * self.q0,
            alpha * self.q1,
            alpha * self.q2,
            alpha * self.q3,
        )
    }

    /// Hamilton product `self * other`.
    ///
    /// Not commutative. The scalar part is `a0*b0 - va·vb` and the vector
    /// part is `a0*vb + b0*va + va × vb`. The `*` operator calls this method.
    ///
    /// # Example
    ///
    /// ```
    /// use cf_quaternion::Quaternion;
    ///
    /// let a = Quaternion::new(1.0, 0.5, -3.0, 4.0);
    /// let b = Quaternion::new(6.0, 2.0, 1.0, -9.0);
    /// assert_eq!(a.multiply(&b), Quaternion::new(44.0, 28.0, -4.5, 21.5));
    /// assert_eq!(Quaternion::I * Quaternion::J, Quaternion::K);
    /// ```
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let (a0, a1, a2, a3) = (self.q0, self.q1, self.q2, self.q3);
        let (b0, b1, b2, b3) = (other.q0, other.q1, other.q2, other.q3);

        Self::new(
            a0 * b0 - a1 * b1 - a2 * b2 - a3 * b3,
            a0 * b1 + a1 * b0 + a2 * b3 - a3 * b2,
            a0 * b2 - a1 * b3 + a2 * b0 + a3 * b1,
            a0 * b3 + a1 * b2 - a2 * b1 + a3 * b0,
        )
    }

    /// Dot product treating both quaternions as 4-vectors.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.q0 * other.q0 + self.q1 * other.q1 + self.q2 * other.q2 + self.q3 * other.q3
    }

    /// Squared norm `q0² + q1² + q2² + q3²`.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.q0 * self.q0 + self.q1 * self.q1 + self.q2 * self.q2 + self.q3 * self.q3
    }

    /// Euclidean norm of the four components.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns the unit quaternion `self * (1 / norm)`.
    ///
    /// Only an exactly zero norm is rejected. Tiny nonzero norms are
    /// normalized even though the result may carry large rounding error.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::ZeroNorm`] if the norm is `0.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use cf_quaternion::Quaternion;
    ///
    /// let versor = Quaternion::new(2.0, 1.0, -4.0, -2.0).normalize()?;
    /// assert_eq!(versor, Quaternion::new(0.4, 0.2, -0.8, -0.4));
    /// assert!(Quaternion::ZERO.normalize().is_err());
    /// # Ok::<(), cf_quaternion::QuaternionError>(())
    /// ```
    pub fn normalize(&self) -> QuaternionResult<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            tracing::debug!(quaternion = %self, "cannot normalize: zero norm");
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Returns the normalized quaternion with a non-negative scalar part.
    ///
    /// `q` and `-q` describe the same orientation; this picks the
    /// representative with `q0 >= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::ZeroNorm`] if the norm is `0.0`.
    pub fn positive_polar_form(&self) -> QuaternionResult<Self> {
        let unit = self.normalize()?;
        if unit.q0 < 0.0 { Ok(-unit) } else { Ok(unit) }
    }

    /// Multiplicative inverse `conjugate / norm²`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::ZeroNorm`] if the squared norm is `0.0`.
    pub fn inverse(&self) -> QuaternionResult<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            tracing::debug!(quaternion = %self, "cannot invert: zero norm");
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(Self::new(
            self.q0 / norm_squared,
            -self.q1 / norm_squared,
            -self.q2 / norm_squared,
            -self.q3 / norm_squared,
        ))
    }

    /// Whether `|norm - 1| <= tolerance`.
    #[must_use]
    pub fn is_unit_quaternion(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    /// Whether `|q0| <= tolerance`. The vector part is unconstrained.
    #[must_use]
    pub fn is_pure_quaternion(&self, tolerance: f64) -> bool {
        self.q0.abs() <= tolerance
    }

    /// Whether every component differs from `other`'s by at most `epsilon`.
    ///
    /// Each axis is checked on its own; this is not a Euclidean distance.
    #[must_use]
    pub fn equals_within(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?} {:?} {:?} {:?}]", self.q0, self.q1, self.q2, self.q3)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([q0, q1, q2, q3]: [f64; 4]) -> Self {
        Self::new(q0, q1, q2, q3)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = QuaternionError;

    fn try_from(components: &[f64]) -> QuaternionResult<Self> {
        Self::from_slice(components)
    }
}

impl From<Vector3<f64>> for Quaternion {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }
}

impl From<nalgebra::Quaternion<f64>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f64>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        Self::new(q.q0, q.q1, q.q2, q.q3)
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.q0 + other.q0,
            self.q1 + other.q1,
            self.q2 + other.q2,
            self.q3 + other.q3,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.q0 - other.q0,
            self.q1 - other.q1,
            self.q2 - other.q2,
            self.q3 - other.q3,
        )
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.q0, -self.q1, -self.q2, -self.q3)
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, alpha: f64) -> Self {
        self.scale(alpha)
    }
}

impl std::ops::Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        q.scale(self)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.equals_within(other, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
    }
}
