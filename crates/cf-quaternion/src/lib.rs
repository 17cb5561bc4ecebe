//! Quaternion arithmetic for CortenForge.
//!
//! This crate provides the real quaternion as a plain value type, the
//! primitive underneath orientation and rotation code elsewhere in the
//! ecosystem:
//!
//! - [`Quaternion`] - Immutable `(q0, q1, q2, q3)` value with Hamilton product,
//!   conjugate, inverse, normalization, dot product and norm
//! - [`Tolerances`] - Comparison thresholds for the approximate predicates
//! - [`linear_combination`] - Compensated `sum(a[i] * b[i])`
//! - [`QuaternionError`] - Dimension and zero-norm failures
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Embedded systems
//! - Other game engines
//! - Python bindings
//!
//! # Conventions
//!
//! `q0` is the scalar part and `(q1, q2, q3)` the vector part, the same
//! `[w, x, y, z]` order used for sensor orientations. Nothing is normalized
//! implicitly: a `Quaternion` holds exactly the components it was built from.
//!
//! # Example
//!
//! ```
//! use cf_quaternion::Quaternion;
//!
//! let a = Quaternion::new(1.0, 0.5, -3.0, 4.0);
//! let b = Quaternion::new(6.0, 2.0, 1.0, -9.0);
//!
//! // Hamilton product, through the method or the operator
//! let product = a.multiply(&b);
//! assert_eq!(product, a * b);
//! assert_eq!(product.to_string(), "[44.0 28.0 -4.5 21.5]");
//!
//! // conj(a * b) == conj(b) * conj(a)
//! assert!(product.conjugate().equals_within(&(b.conjugate() * a.conjugate()), 1e-12));
//!
//! // Inverse and normalization reject only an exactly zero norm
//! let inverse = a.inverse()?;
//! assert!((inverse * a).equals_within(&Quaternion::IDENTITY, 1e-14));
//! assert!(Quaternion::ZERO.normalize().is_err());
//! # Ok::<(), cf_quaternion::QuaternionError>(())
//! ```
//!
//! # Multiplying by Vectors
//!
//! A 3-vector is multiplied by wrapping it in a pure quaternion; there is no
//! separate vector product routine:
//!
//! ```
//! use cf_quaternion::Quaternion;
//!
//! let q = Quaternion::new(4.0, 7.0, -1.0, 2.0);
//! let v = Quaternion::from_vector(&[2.0, 1.0, 3.0])?;
//!
//! assert_eq!(q * v, Quaternion::new(-19.0, 3.0, -13.0, 21.0));
//! assert_eq!(v * q, Quaternion::new(-19.0, 13.0, 21.0, 3.0));
//! # Ok::<(), cf_quaternion::QuaternionError>(())
//! ```
//!
//! # Quality Standards
//!
//! This crate maintains A-grade standards:
//! - ≥90% test coverage
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::many_single_char_names, clippy::similar_names)]

mod combination;
mod error;
mod quaternion;
mod tolerance;

// Re-export core types
pub use combination::linear_combination;
pub use error::{QuaternionError, QuaternionResult};
pub use quaternion::Quaternion;
pub use tolerance::{DEFAULT_TOLERANCE, Tolerances};

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
