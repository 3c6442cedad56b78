use super::ColorSpace;
use crate::Float;

#[inline]
fn in_unit(c: Float) -> bool {
    (0.0..=1.0).contains(&c)
}

/// Determine whether the coordinates are in gamut for their color space.
///
/// RGB coordinates must be in unit range. HSL saturation and lightness as well
/// as HWB whiteness and blackness must be in unit range, too, whereas their
/// hues may take any value. Unbounded color spaces are always in gamut.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    if space.is_rgb() {
        coordinates.iter().all(|c| in_unit(*c))
    } else if space.is_cylindrical() {
        in_unit(coordinates[1]) && in_unit(coordinates[2])
    } else {
        true
    }
}

/// Clip the coordinates to the gamut of their color space.
///
/// This is the only gamut mapping the engine performs. It leaves coordinates
/// of unbounded color spaces untouched.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;
    if space.is_rgb() {
        [c1.clamp(0.0, 1.0), c2.clamp(0.0, 1.0), c3.clamp(0.0, 1.0)]
    } else if space.is_cylindrical() {
        [c1, c2.clamp(0.0, 1.0), c3.clamp(0.0, 1.0)]
    } else {
        *coordinates
    }
}
