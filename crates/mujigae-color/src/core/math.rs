use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

/// Normalize the hue to `0..360`. Not-a-number stays not-a-number.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid may round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}
