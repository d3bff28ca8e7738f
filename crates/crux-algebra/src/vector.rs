//! 3D vector (single precision).

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::float::hash_bits;

/// 3D vector (single precision).
///
/// This is an immutable newtype around `glam::Vec3`. Every operation returns a
/// new value; equality is exact and componentwise. With the `approx` feature,
/// `approx::AbsDiffEq` compares within [`crate::PRECISION`] by default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(transparent)]
pub struct Vector3D(glam::Vec3);

impl Vector3D {
    /// Zero vector.
    pub const ZERO: Self = Self(glam::Vec3::ZERO);

    /// Create a new vector from x, y, and z components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(glam::Vec3::new(x, y, z))
    }

    /// Create a vector with all components set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self(glam::Vec3::splat(value))
    }

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(arr: [f32; 3]) -> Self {
        Self(glam::Vec3::from_array(arr))
    }

    /// Convert to array.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }

    /// Get the x component.
    #[inline]
    pub fn x(self) -> f32 {
        self.0.x
    }

    /// Get the y component.
    #[inline]
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// Get the z component.
    #[inline]
    pub fn z(self) -> f32 {
        self.0.z
    }

    /// Euclidean length of the vector, `sqrt(x² + y² + z²)`.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.0.length()
    }

    /// Unit vector pointing in the same direction.
    ///
    /// The zero vector is returned unchanged instead of dividing by zero.
    pub fn normalize(self) -> Self {
        if self == Self::ZERO {
            return Self::ZERO;
        }

        self / self.magnitude()
    }
}

impl Hash for Vector3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.0.x).hash(state);
        hash_bits(self.0.y).hash(state);
        hash_bits(self.0.z).hash(state);
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Vector3D {
    type Epsilon = <glam::Vec3 as approx::AbsDiffEq>::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        crate::PRECISION
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        <glam::Vec3 as approx::AbsDiffEq>::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Vector3D {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <glam::Vec3 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        <glam::Vec3 as approx::RelativeEq>::relative_eq(
            &self.0,
            &other.0,
            epsilon,
            max_relative,
        )
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl From<glam::Vec3> for Vector3D {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self(v)
    }
}

impl From<Vector3D> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3D) -> Self {
        v.0
    }
}

impl From<[f32; 3]> for Vector3D {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3D> for [f32; 3] {
    #[inline]
    fn from(v: Vector3D) -> Self {
        v.to_array()
    }
}

// Arithmetic operations
impl std::ops::Neg for Vector3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl std::ops::Add for Vector3D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Vector3D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f32> for Vector3D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

// Scalar multiplication (reverse)
impl std::ops::Mul<Vector3D> for f32 {
    type Output = Vector3D;

    #[inline]
    fn mul(self, rhs: Vector3D) -> Self::Output {
        rhs * self
    }
}

// Division goes through the reciprocal; a zero divisor yields inf/NaN components.
impl std::ops::Div<f32> for Vector3D {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};
    use std::collections::HashSet;

    #[test]
    fn test_vector3d_default() {
        let v = Vector3D::default();
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(v, Vector3D::ZERO);
    }

    #[test]
    fn test_vector3d_basic() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn test_vector3d_splat() {
        for value in [0.0, 1.0, -1.1, f32::MIN, f32::MAX, f32::EPSILON] {
            let v = Vector3D::splat(value);
            assert_eq!(v.to_array(), [value; 3]);
        }
    }

    #[test]
    fn test_vector3d_zero_is_a_value() {
        assert_eq!(Vector3D::new(0.0, 0.0, 0.0), Vector3D::ZERO);
        assert_eq!(Vector3D::splat(0.0), Vector3D::ZERO);
    }

    #[test]
    fn test_vector3d_conversion() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let glam_v: glam::Vec3 = v.into();
        let back: Vector3D = glam_v.into();
        assert_eq!(v, back);

        let arr: [f32; 3] = v.into();
        assert_eq!(Vector3D::from(arr), v);
    }

    #[test]
    fn test_vector3d_magnitude() {
        let cases = [
            ([1.0, 1.0, 1.0], 1.732_050_8),
            ([0.0, 0.0, 0.0], 0.0),
            ([3.0, 4.0, 0.0], 5.0),
            ([0.0, 3.0, 4.0], 5.0),
            ([1.0, 2.0, 2.0], 3.0),
            ([-1.0, -1.0, -1.0], 1.732_050_8),
            ([1e-7, 1e-7, 1e-7], 1.732_050_8e-7),
        ];
        for (arr, expected) in cases {
            assert_relative_eq!(Vector3D::from(arr).magnitude(), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_vector3d_normalize() {
        let n = Vector3D::new(3.0, 4.0, 0.0).normalize();
        assert_relative_eq!(n.x(), 0.6, epsilon = 1e-6);
        assert_relative_eq!(n.y(), 0.8, epsilon = 1e-6);
        assert_relative_eq!(n.z(), 0.0, epsilon = 1e-6);

        let n = Vector3D::new(-2.0, 0.0, 0.0).normalize();
        assert_eq!(n, Vector3D::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_vector3d_normalize_zero() {
        assert_eq!(Vector3D::ZERO.normalize(), Vector3D::ZERO);
        let n = Vector3D::new(0.0, 0.0, 0.0).normalize();
        assert!(!n.x().is_nan());
        assert_eq!(n, Vector3D::ZERO);
    }

    #[test]
    fn test_vector3d_neg() {
        let v = -Vector3D::new(1.1, -2.2, 3.3);
        assert_eq!(v, Vector3D::new(-1.1, 2.2, -3.3));
    }

    #[test]
    fn test_vector3d_add_sub() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(-4.0, 0.5, 2.0);
        assert_eq!(a + b, Vector3D::new(-3.0, 2.5, 5.0));
        assert_eq!(a + b, b + a);
        assert_eq!(a - b, Vector3D::new(5.0, 1.5, 1.0));
        assert_eq!(a - a, Vector3D::ZERO);
    }

    #[test]
    fn test_vector3d_scale_both_orders() {
        let v = Vector3D::new(1.0, -2.0, 3.0);
        assert_eq!(v * 2.0, Vector3D::new(2.0, -4.0, 6.0));
        assert_eq!(2.0 * v, v * 2.0);
    }

    #[test]
    fn test_vector3d_div() {
        let v = Vector3D::new(2.0, 4.0, 8.0) / 2.0;
        assert_eq!(v, Vector3D::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_vector3d_div_by_zero() {
        let v = Vector3D::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
        assert!(v.z().is_nan());
    }

    #[test]
    fn test_vector3d_abs_diff_eq() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(1.0 + 5e-7, 2.0, 3.0);
        assert_abs_diff_eq!(a, b);
        assert_abs_diff_ne!(a, b, epsilon = 1e-9);
        assert_abs_diff_ne!(a, Vector3D::new(1.1, 2.0, 3.0));
        assert_relative_eq!(a * 1e3, b * 1e3, max_relative = 1e-6);
    }

    #[test]
    fn test_vector3d_hash() {
        let mut set = HashSet::new();
        set.insert(HashKey(Vector3D::new(0.0, 1.0, 2.0)));
        assert!(set.contains(&HashKey(Vector3D::new(-0.0, 1.0, 2.0))));
        assert!(!set.contains(&HashKey(Vector3D::new(0.0, 1.0, 2.5))));
    }

    #[test]
    fn test_vector3d_display() {
        assert_eq!(Vector3D::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
    }

    // `Vector3D` is only `PartialEq`; wrap it to key a set in tests.
    #[derive(PartialEq)]
    struct HashKey(Vector3D);

    impl Eq for HashKey {}

    impl Hash for HashKey {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.hash(state);
        }
    }
}
