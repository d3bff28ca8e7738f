//! Float comparison helpers shared by the vector and matrix types.

/// The precision to use when comparing floats.
pub const PRECISION: f32 = 1e-6;

/// Check whether two floats differ by strictly less than [`PRECISION`].
///
/// `approx::AbsDiffEq` accepts a difference equal to epsilon; matrix equality must not.
#[inline]
pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < PRECISION
}

/// Bit pattern of `value` used for hashing, with `-0.0` folded onto `0.0`.
#[inline]
pub(crate) fn hash_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}
