use super::{normalize, ColorSpace};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function converts the color coordinates to 24-bit representation. It
/// assumes that the color is an RGB color. Not-a-number coordinates become
/// zero, and all coordinates are clamped to `0..=1` before scaling, which is
/// how browsers serialize out-of-gamut sRGB colors, too.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = normalize(space, coordinates);
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected RGB to linear RGB using sRGB's
/// gamma. Display P3 uses the very same gamma. This is a one-hop, direct
/// conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear RGB to gamma-corrected RGB using sRGB's
/// gamma. Display P3 uses the very same gamma. This is a one-hop, direct
/// conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

mod cylindrical {
    use crate::core::math::normalize_hue;
    use crate::Float;

    /// Convert coordinates for HSL to sRGB. This is a one-hop, direct
    /// conversion following CSS Color 4.
    pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
        let [h, s, l] = *value;
        let h = if h.is_nan() { 0.0 } else { normalize_hue(h) };
        let a = s * l.min(1.0 - l);

        let f = |n: Float| {
            let k = (n + h / 30.0) % 12.0;
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [f(0.0), f(8.0), f(4.0)]
    }

    /// Convert coordinates for sRGB to HSL. This is a one-hop, direct
    /// conversion. The hue of grays is not-a-number.
    pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let denominator = 1.0 - (max + min - 1.0).abs();
        let s = if delta == 0.0 || denominator == 0.0 {
            0.0
        } else {
            delta / denominator
        };

        [hue_of(r, g, b, max, delta), s, l]
    }

    /// Convert coordinates for HWB to sRGB. This is a one-hop, direct
    /// conversion following CSS Color 4.
    pub(crate) fn hwb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
        let [h, w, b] = *value;
        if w + b >= 1.0 {
            let gray = w / (w + b);
            return [gray, gray, gray];
        }

        let rgb = hsl_to_srgb(&[h, 1.0, 0.5]);
        let scale = 1.0 - w - b;
        [
            rgb[0].mul_add(scale, w),
            rgb[1].mul_add(scale, w),
            rgb[2].mul_add(scale, w),
        ]
    }

    /// Convert coordinates for sRGB to HWB. This is a one-hop, direct
    /// conversion. The hue of grays is not-a-number.
    pub(crate) fn srgb_to_hwb(value: &[Float; 3]) -> [Float; 3] {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        [hue_of(r, g, b, max, max - min), min, 1.0 - max]
    }

    fn hue_of(r: Float, g: Float, b: Float, max: Float, delta: Float) -> Float {
        if delta == 0.0 {
            return Float::NAN;
        }

        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        normalize_hue(sector * 60.0)
    }
}

use cylindrical::{hsl_to_srgb, hwb_to_srgb, srgb_to_hsl, srgb_to_hwb};

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: [[Float; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

/// Convert coordinates for Display P3 to XYZ. This is a two-hop conversion
/// through linear Display P3.
#[inline]
fn display_p3_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = rgb_to_linear_rgb(value);
    multiply(&LINEAR_DISPLAY_P3_TO_XYZ, &linear_p3)
}

/// Convert coordinates for XYZ to Display P3. This is a two-hop conversion
/// through linear Display P3.
#[inline]
fn xyz_to_display_p3(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = multiply(&XYZ_TO_LINEAR_DISPLAY_P3, value);
    linear_rgb_to_rgb(&linear_p3)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/main/src/spaces/rec2020.js

mod rec2020 {
    use crate::Float;

    #[allow(clippy::excessive_precision)]
    const ALPHA: Float = 1.09929682680944;
    #[allow(clippy::excessive_precision)]
    const BETA: Float = 0.018053968510807;

    /// Convert coordinates for Rec. 2020 to linear Rec. 2020. This is a
    /// one-hop, direct conversion.
    pub(super) fn rec2020_to_linear_rec2020(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn convert(value: Float) -> Float {
            if value < BETA * 4.5 {
                value / 4.5
            } else {
                ((value + ALPHA - 1.0) / ALPHA).powf((0.45 as Float).recip())
            }
        }

        [convert(value[0]), convert(value[1]), convert(value[2])]
    }

    /// Convert coordinates for linear Rec. 2020 to Rec. 2020. This is a
    /// one-hop, direct conversion.
    pub(super) fn linear_rec2020_to_rec2020(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn convert(value: Float) -> Float {
            if value < BETA {
                value * 4.5
            } else {
                ALPHA * value.powf(0.45) - (ALPHA - 1.0)
            }
        }

        [convert(value[0]), convert(value[1]), convert(value[2])]
    }
}

use rec2020::{linear_rec2020_to_rec2020, rec2020_to_linear_rec2020};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_REC2020_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.6369580483012914, 0.14461690358620832,  0.1688809751641721  ],
    [ 0.2627002120112671, 0.6779980715188708,   0.05930171646986196 ],
    [ 0.000000000000000,  0.028072693049087428, 1.060985057710791   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_REC2020: [[Float; 3]; 3] = [
    [  1.716651187971268,  -0.355670783776392, -0.253366281373660  ],
    [ -0.666684351832489,   1.616481236634939,  0.0157685458139111 ],
    [  0.017639857445311,  -0.042770613257809,  0.942103121235474  ],
];

/// Convert coordinates for Rec. 2020 to XYZ. This is a two-hop conversion.
#[inline]
fn rec2020_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_rec2020 = rec2020_to_linear_rec2020(value);
    multiply(&LINEAR_REC2020_TO_XYZ, &linear_rec2020)
}

/// Convert coordinates for XYZ to Rec. 2020. This is a two-hop conversion.
#[inline]
fn xyz_to_rec2020(value: &[Float; 3]) -> [Float; 3] {
    let linear_rec2020 = multiply(&XYZ_TO_LINEAR_REC2020, value);
    linear_rec2020_to_rec2020(&linear_rec2020)
}

// --------------------------------------------------------------------------------------------------------------------

mod polar {
    use crate::core::math::normalize_hue;
    use crate::Float;

    /// The magnitude of a/b below which Oklab colors are considered gray.
    ///
    /// The threshold only absorbs floating point noise from conversions. The
    /// visible near-gray cutoff is the formatter's business.
    pub(crate) const OK_EPSILON: Float = 1e-9;

    /// The magnitude of a/b below which CIELAB colors are considered gray.
    pub(crate) const LAB_EPSILON: Float = 1e-7;

    /// Convert polar coordinates (Oklch or Lch) to Cartesian coordinates
    /// (Oklab or Lab). This is a one-hop, direct conversion.
    #[allow(non_snake_case)]
    pub(crate) fn ch_to_ab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;

        if h.is_nan() {
            [L, 0.0, 0.0]
        } else {
            let hue_radian = h.to_radians();
            [L, C * hue_radian.cos(), C * hue_radian.sin()]
        }
    }

    /// Convert Cartesian coordinates (Oklab or Lab) to polar coordinates
    /// (Oklch or Lch). This is a one-hop, direct conversion. Grays have zero
    /// chroma and not-a-number hue.
    #[allow(non_snake_case)]
    pub(crate) fn ab_to_ch(value: &[Float; 3], epsilon: Float) -> [Float; 3] {
        let [L, a, b] = *value;

        let a_m = a.abs();
        let b_m = b.abs();
        if a_m < epsilon && b_m < epsilon {
            return [L, 0.0, Float::NAN];
        }

        // per herbie 2.1
        let C = if a_m < b_m { b_m.hypot(a_m) } else { a_m.hypot(b_m) };
        let h = normalize_hue(b.atan2(a).to_degrees());

        [L, C, h]
    }
}

use polar::{ab_to_ch, ch_to_ab, LAB_EPSILON, OK_EPSILON};

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

/// Convert coordinates for Oklab to XYZ. This is a one-hop, direct conversion,
/// even though it requires two matrix multiplications and a coordinate-wise
/// exponential.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert coordinates for XYZ to Oklab. This is a one-hop, direct conversion,
/// even though it requires two matrix multiplications and a coordinate-wise
/// exponential.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/main/src/spaces/lab.js

mod cielab {
    use crate::Float;

    const KAPPA: Float = 24389.0 / 27.0;
    const EPSILON: Float = 216.0 / 24389.0;

    #[allow(clippy::excessive_precision)]
    const D50_WHITE: [Float; 3] = [
        0.3457 / 0.3585,
        1.0,
        (1.0 - 0.3457 - 0.3585) / 0.3585,
    ];

    /// Convert coordinates for XYZ D50 to CIELAB. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn xyz_d50_to_lab(value: &[Float; 3]) -> [Float; 3] {
        let f = |index: usize| {
            let v = value[index] / D50_WHITE[index];
            if v > EPSILON {
                v.cbrt()
            } else {
                KAPPA.mul_add(v, 16.0) / 116.0
            }
        };

        let [f0, f1, f2] = [f(0), f(1), f(2)];
        [
            f1.mul_add(116.0, -16.0),
            500.0 * (f0 - f1),
            200.0 * (f1 - f2),
        ]
    }

    /// Convert coordinates for CIELAB to XYZ D50. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn lab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let f1 = (L + 16.0) / 116.0;
        let f0 = a / 500.0 + f1;
        let f2 = f1 - b / 200.0;

        let x = if f0.powi(3) > EPSILON {
            f0.powi(3)
        } else {
            f0.mul_add(116.0, -16.0) / KAPPA
        };
        let y = if L > KAPPA * EPSILON {
            f1.powi(3)
        } else {
            L / KAPPA
        };
        let z = if f2.powi(3) > EPSILON {
            f2.powi(3)
        } else {
            f2.mul_add(116.0, -16.0) / KAPPA
        };

        [x * D50_WHITE[0], y * D50_WHITE[1], z * D50_WHITE[2]]
    }
}

use cielab::{lab_to_xyz_d50, xyz_d50_to_lab};

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: [[Float; 3]; 3] = [
    [  1.0479297925449969,   0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,  0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504, 0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: [[Float; 3]; 3] = [
    [  0.955473421488075,    -0.02309845494876471,  0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,   0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964, 1.330365926242124    ],
];

/// Convert XYZ D65 to XYZ D50 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
fn d65_to_d50(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D65_TO_D50, value)
}

/// Convert XYZ D50 to XYZ D65 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
fn d50_to_d65(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D50_TO_D65, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion.
#[inline]
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_rgb_to_rgb(&linear_srgb)
}

/// Convert coordinates for Oklch to XYZ. This is a two-hop conversion.
#[inline]
fn oklch_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let oklab = ch_to_ab(value);
    oklab_to_xyz(&oklab)
}

/// Convert coordinates for XYZ to Oklch. This is a two-hop conversion.
#[inline]
fn xyz_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let oklab = xyz_to_oklab(value);
    ab_to_ch(&oklab, OK_EPSILON)
}

/// Convert coordinates for CIELAB to XYZ D65. This is a two-hop conversion.
#[inline]
fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    d50_to_d65(&lab_to_xyz_d50(value))
}

/// Convert coordinates for XYZ D65 to CIELAB. This is a two-hop conversion.
#[inline]
fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xyz_d50_to_lab(&d65_to_d50(value))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to to the targeted color space, which may be the same as the original
/// color space. This function does not check whether the result is in gamut for
/// the targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return rgb_to_linear_rgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_rgb_to_rgb(&coordinates),

        // sRGB reparametrizations
        (Hsl, Srgb) => return hsl_to_srgb(&coordinates),
        (Srgb, Hsl) => return srgb_to_hsl(&coordinates),
        (Hwb, Srgb) => return hwb_to_srgb(&coordinates),
        (Srgb, Hwb) => return srgb_to_hwb(&coordinates),
        (Hsl, Hwb) => return srgb_to_hwb(&hsl_to_srgb(&coordinates)),
        (Hwb, Hsl) => return srgb_to_hsl(&hwb_to_srgb(&coordinates)),

        // Polar and Cartesian coordinates for the same color space
        (Lch, Lab) | (Oklch, Oklab) => return ch_to_ab(&coordinates),
        (Lab, Lch) => return ab_to_ch(&coordinates, LAB_EPSILON),
        (Oklab, Oklch) => return ab_to_ch(&coordinates, OK_EPSILON),

        // CIELAB is anchored in XYZ D50
        (Lab, XyzD50) => return lab_to_xyz_d50(&coordinates),
        (XyzD50, Lab) => return xyz_d50_to_lab(&coordinates),
        _ => (),
    };

    // 3a. Convert from source color space to root XYZ
    let intermediate = match from_space {
        Srgb => srgb_to_xyz(&coordinates),
        LinearSrgb => linear_srgb_to_xyz(&coordinates),
        Hsl => srgb_to_xyz(&hsl_to_srgb(&coordinates)),
        Hwb => srgb_to_xyz(&hwb_to_srgb(&coordinates)),
        DisplayP3 => display_p3_to_xyz(&coordinates),
        Rec2020 => rec2020_to_xyz(&coordinates),
        Lab => lab_to_xyz(&coordinates),
        Lch => lab_to_xyz(&ch_to_ab(&coordinates)),
        Oklab => oklab_to_xyz(&coordinates),
        Oklch => oklch_to_xyz(&coordinates),
        Xyz => coordinates,
        XyzD50 => d50_to_d65(&coordinates),
    };

    // 3b. Convert from root XYZ to target color space on different branch
    match to_space {
        Srgb => xyz_to_srgb(&intermediate),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Hsl => srgb_to_hsl(&xyz_to_srgb(&intermediate)),
        Hwb => srgb_to_hwb(&xyz_to_srgb(&intermediate)),
        DisplayP3 => xyz_to_display_p3(&intermediate),
        Rec2020 => xyz_to_rec2020(&intermediate),
        Lab => xyz_to_lab(&intermediate),
        Lch => ab_to_ch(&xyz_to_lab(&intermediate), LAB_EPSILON),
        Oklab => xyz_to_oklab(&intermediate),
        Oklch => xyz_to_oklch(&intermediate),
        Xyz => intermediate,
        XyzD50 => d65_to_d50(&intermediate),
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, ColorSpace::*};
    use crate::Float;

    struct Representations {
        srgb: [Float; 3],
        linear_srgb: [Float; 3],
        p3: [Float; 3],
        rec2020: [Float; 3],
        oklch: [Float; 3],
        oklab: [Float; 3],
        xyz: [Float; 3],
        xyz_d50: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        srgb: [0.0, 0.0, 0.0],
        linear_srgb: [0.0, 0.0, 0.0],
        p3: [0.0, 0.0, 0.0],
        rec2020: [0.0, 0.0, 0.0],
        oklch: [0.0, 0.0, Float::NAN],
        oklab: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
        xyz_d50: [0.0, 0.0, 0.0],
    };

    const YELLOW: Representations = Representations {
        // #ffca00
        srgb: [1.0, 0.792156862745098, 0.0],
        linear_srgb: [1.0, 0.5906188409193369, 0.0],
        p3: [0.967346220711791, 0.8002244967941964, 0.27134084647161244],
        rec2020: [0.9071245864481046, 0.7821891940186851, 0.22941491945066222],
        oklch: [0.8613332073307732, 0.1760097742886813, 89.440876452466],
        oklab: [
            0.8613332073307732,
            0.0017175723640959761,
            0.17600139371700052,
        ],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
        xyz_d50: [0.6635434850467424, 0.6459001538545541, 0.07126198065563918],
    };

    const BLUE: Representations = Representations {
        // #3178ea
        srgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        linear_srgb: [
            0.030713443732993635,
            0.18782077230067787,
            0.8227857543962835,
        ],
        p3: [0.26851535563550943, 0.4644576150842869, 0.8876966971452301],
        rec2020: [0.318905170074285, 0.4141244051667745, 0.8687817570254107],
        oklch: [0.5909012953108558, 0.18665606306724153, 259.66681920272595],
        oklab: [
            0.5909012953108558,
            -0.03348086515869664,
            -0.1836287492414715,
        ],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
        xyz_d50: [0.20345542047334936, 0.1913569200613913, 0.6062123188831731],
    };

    #[test]
    fn test_conversions() {
        for &color in [&BLACK, &YELLOW, &BLUE].iter() {
            let linear_srgb = rgb_to_linear_rgb(&color.srgb);
            assert_same_coordinates!(LinearSrgb, &linear_srgb, &color.linear_srgb);

            let srgb = linear_rgb_to_rgb(&linear_srgb);
            assert_same_coordinates!(Srgb, &srgb, &color.srgb);

            let xyz = linear_srgb_to_xyz(&linear_srgb);
            assert_same_coordinates!(Xyz, &xyz, &color.xyz);

            let also_linear_srgb = xyz_to_linear_srgb(&xyz);
            assert_same_coordinates!(LinearSrgb, &also_linear_srgb, &linear_srgb);

            let p3 = xyz_to_display_p3(&xyz);
            assert_same_coordinates!(DisplayP3, &p3, &color.p3);

            let also_xyz = display_p3_to_xyz(&p3);
            assert_same_coordinates!(Xyz, &also_xyz, &xyz);

            let rec2020 = xyz_to_rec2020(&xyz);
            assert_same_coordinates!(Rec2020, &rec2020, &color.rec2020);

            let and_also_xyz = rec2020_to_xyz(&rec2020);
            assert_same_coordinates!(Xyz, &and_also_xyz, &xyz);

            let oklab = xyz_to_oklab(&xyz);
            assert_same_coordinates!(Oklab, &oklab, &color.oklab);

            let and_again_xyz = oklab_to_xyz(&oklab);
            assert_same_coordinates!(Xyz, &and_again_xyz, &xyz);

            let oklch = ab_to_ch(&oklab, OK_EPSILON);
            assert_same_coordinates!(Oklch, &oklch, &color.oklch);

            let also_oklab = ch_to_ab(&oklch);
            assert_same_coordinates!(Oklab, &also_oklab, &oklab);

            let xyz_d50 = d65_to_d50(&xyz);
            assert_same_coordinates!(XyzD50, &xyz_d50, &color.xyz_d50);

            let xyz_again = d50_to_d65(&xyz_d50);
            assert_same_coordinates!(Xyz, &xyz_again, &color.xyz);
        }
    }

    fn assert_close(actual: &[Float; 3], expected: &[Float; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a - e).abs() < 1e-9,
                "coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_hsl_hwb() {
        assert_close(&srgb_to_hsl(&[1.0, 0.0, 0.0]), &[0.0, 1.0, 0.5]);
        assert_close(&srgb_to_hsl(&[0.0, 1.0, 0.0]), &[120.0, 1.0, 0.5]);
        assert_close(&srgb_to_hsl(&[0.0, 0.0, 0.5]), &[240.0, 1.0, 0.25]);
        assert_close(&hsl_to_srgb(&[60.0, 1.0, 0.5]), &[1.0, 1.0, 0.0]);
        assert_close(&hsl_to_srgb(&[300.0, 0.5, 0.75]), &[0.875, 0.625, 0.875]);

        let gray = srgb_to_hsl(&[0.5, 0.5, 0.5]);
        assert!(gray[0].is_nan());
        assert_eq!(gray[1], 0.0);
        assert_eq!(gray[2], 0.5);
        assert_close(&hsl_to_srgb(&gray), &[0.5, 0.5, 0.5]);

        assert_close(&srgb_to_hwb(&[1.0, 0.5, 0.0]), &[30.0, 0.0, 0.0]);
        assert_close(&hwb_to_srgb(&[30.0, 0.0, 0.0]), &[1.0, 0.5, 0.0]);
        assert_close(&hwb_to_srgb(&[0.0, 0.6, 0.6]), &[0.5, 0.5, 0.5]);

        for color in [YELLOW.srgb, BLUE.srgb] {
            assert_close(&hsl_to_srgb(&srgb_to_hsl(&color)), &color);
            assert_close(&hwb_to_srgb(&srgb_to_hwb(&color)), &color);
        }
    }

    #[test]
    fn test_cielab() {
        // D50 white is L=100 with no colorness.
        let white = lab_to_xyz_d50(&[100.0, 0.0, 0.0]);
        assert_close(&xyz_d50_to_lab(&white), &[100.0, 0.0, 0.0]);
        assert_close(
            &white,
            &[0.3457 / 0.3585, 1.0, (1.0 - 0.3457 - 0.3585) / 0.3585],
        );

        for color in [YELLOW.xyz, BLUE.xyz] {
            let lab = xyz_to_lab(&color);
            assert_close(&lab_to_xyz(&lab), &color);

            let lch = ab_to_ch(&lab, LAB_EPSILON);
            assert_close(&ch_to_ab(&lch), &lab);
        }

        let gray = convert(Srgb, Lch, &[0.5, 0.5, 0.5]);
        assert!(gray[2].is_nan());
        assert_eq!(gray[1], 0.0);
    }

    #[test]
    fn test_convert_routes() {
        // Going the long way through XYZ arrives at the same place.
        let hsl = convert(Srgb, Hsl, &BLUE.srgb);
        assert_close(&convert(Hsl, Oklch, &hsl), &BLUE.oklch);
        assert_close(&convert(Oklab, Hwb, &BLUE.oklab), &srgb_to_hwb(&BLUE.srgb));
        assert_close(&convert(Lab, Srgb, &convert(Srgb, Lab, &YELLOW.srgb)), &YELLOW.srgb);
        assert_close(&convert(DisplayP3, Srgb, &YELLOW.p3), &YELLOW.srgb);
    }
}
