use super::ColorSpace;
use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, clamping lightness and chroma of
/// Oklab colors, scaling the hue, reducing resolution, and dropping the sign of
/// negative zeros before comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting the equality of colors.
///
/// This macro tests the color objects for equality using the `Eq` trait. The
/// implementation, in turn, normalizes the coordinates of colors with the same
/// color space before comparing them. See [`Color`](crate::Color) for details.
///
/// # Panics
///
/// This macro panics if the colors differ. Its message places either color
/// spaces or the coordinates below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        if c1.space() != c2.space() {
            assert_eq!(
                c1,
                c2,
                "color spaces differ:\n{:?}\n{:?}",
                c1.space(),
                c2.space()
            );
        }

        assert_eq!(
            c1,
            c2,
            "color coordinates differ:\n{:?}\n{:?}",
            c1.as_ref(),
            c2.as_ref()
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function ensures that coordinates are well-formed. In particular, it
/// replaces not-a-number coordinates with zero, which is how CSS treats
/// missing components. For Oklab and Oklch, it also ensures that lightness is
/// in `0..=1`. For polar color spaces, it ensures that chroma is in `0..`.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [mut c1, mut c2, mut c3] = *coordinates;

    if c1.is_nan() {
        c1 = 0.0;
    }
    if c2.is_nan() {
        c2 = 0.0;
    }
    if c3.is_nan() {
        c3 = 0.0;
    }

    if space.is_ok() {
        c1 = c1.clamp(0.0, 1.0);
    }
    if space.is_polar() {
        c2 = c2.max(0.0);
    }

    [c1, c2, c3]
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    // Zero out not-a-numbers and clamp lightness/chroma.
    let mut cs = normalize(space, coordinates);

    // Normalize rotation and scale to unit range.
    if let Some(index) = space.hue_index() {
        cs[index] = cs[index].rem_euclid(360.0) / 360.0;
    }

    // Reduce precision and prevent too much negativity.
    let factor = <Float as FloatExt>::ROUNDING_FACTOR;
    cs.map(|c| {
        let mut c = (c * factor).round();
        if c == -0.0 {
            c = 0.0;
        }
        c.to_bits()
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// --------------------------------------------------------------------------------------------------------------------
