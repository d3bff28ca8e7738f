#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Crux Algebra
//!
//! Small value types used as math primitives by the crux engine:
//!
//! - [`Vector3D`]: an immutable 3D vector with arithmetic, magnitude and normalization.
//! - [`Matrix3D`]: a 3x3 matrix with checked cell and column access, tolerance based
//!   equality and matrix arithmetic.
//!
//! With the `approx` feature (on by default) both types implement
//! `approx::AbsDiffEq` and `approx::RelativeEq`, with [`PRECISION`] as default epsilon.
//!
//! ## Example
//!
//! ```rust
//! use crux_algebra::{Matrix3D, Vector3D};
//!
//! let m = Matrix3D::from_cols(
//!     Vector3D::new(1.0, 0.0, 0.0),
//!     Vector3D::new(0.0, 2.0, 0.0),
//!     Vector3D::new(0.0, 0.0, 3.0),
//! );
//! assert_eq!(m * Vector3D::splat(1.0), Vector3D::new(1.0, 2.0, 3.0));
//! assert_eq!(m.col(1)?.normalize(), Vector3D::new(0.0, 1.0, 0.0));
//! # Ok::<(), crux_algebra::AlgebraError>(())
//! ```

mod error;
mod float;
mod matrix;
mod vector;

pub use error::AlgebraError;
pub use float::PRECISION;
pub use matrix::Matrix3D;
pub use vector::Vector3D;
