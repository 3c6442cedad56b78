use std::str::FromStr;

use crate::core::{
    clip, convert, format, from_24bit, in_gamut, normalize, parse,
    to_24bit, to_eq_bits, to_eq_coordinates, ColorSpace,
};

use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
///
/// Rust currently does not allow floating point operations in const functions.
/// That makes it impossible to write a const function that constructs a new
/// high-resolution color object from integer coordinates. However, Rust does
/// allow floating point operations in const expressions, notably as arguments
/// to a const function such as a constructor. Hence, a macro can convert the
/// integer coordinates before passing them to the const function.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A high-resolution color object.
///
/// Every color object has a [color space](ColorSpace), three coordinates, and
/// an alpha in unit range.
///
/// # Color Coordinates
///
/// For RGB color spaces, the coordinates of in-gamut colors have unit range.
/// The same holds for the second and third coordinate of HSL and HWB. For the
/// other color spaces, there are no gamut bounds.
///
/// A coordinate may be not-a-number either because it is a [powerless
/// component](https://www.w3.org/TR/css-color-4/#powerless), such as the hue in
/// Oklch when chroma is zero, or a [missing
/// component](https://www.w3.org/TR/css-color-4/#missing), i.e., a component
/// written as `none`. Conversion replaces not-a-numbers with zero.
///
/// ## Equality Testing and Hashing
///
/// Equal colors must have equal hashes. Hence this class prepares coordinates
/// for either operation by replacing not-a-numbers with positive zero, removing
/// full rotations from hues, scaling hues to unit range, reducing precision,
/// and replacing negative zero with positive zero. It then compares the
/// resulting bit strings. The alpha is treated the same, minus the hue
/// handling.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
    alpha: Float,
}

impl Color {
    /// Instantiate a new, opaque color with the given color space and
    /// coordinates.
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink.as_ref(), &[0.7_f64, 0.22_f64, 3.0_f64]);
    /// assert_eq!(pink.alpha(), 1.0);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self {
            space,
            coordinates,
            alpha: 1.0,
        }
    }

    /// Create a copy of this color with the given alpha, clamped to unit
    /// range. A not-a-number alpha becomes zero.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };

        Self {
            alpha,
            ..self.clone()
        }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let fire_brick = Color::srgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick.space(), ColorSpace::Srgb);
    /// ```
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Display P3 color with the given red, green, and blue
    /// coordinates.
    pub fn p3(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::DisplayP3, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new HSL color with the given hue, saturation, and
    /// lightness. Saturation and lightness are fractions, not percentages.
    pub fn hsl(h: impl Into<Float>, s: impl Into<Float>, l: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hsl, [h.into(), s.into(), l.into()])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b
    /// coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let sky = Color::oklab(0.78, -0.1, -0.1);
    /// assert_eq!(sky.space(), ColorSpace::Oklab);
    /// ```
    pub fn oklab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklab, [l.into(), a.into(), b.into()])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C, and
    /// hue h coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let turquoise = Color::oklch(0.54, 0.11, 201);
    /// assert_eq!(turquoise.space(), ColorSpace::Oklch);
    /// ```
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklch, [l.into(), c.into(), h.into()])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// ```
    /// # use mujigae_color::{rgb, Color};
    /// let blue = Color::from_24bit(0x3b, 0x82, 0xf6);
    /// assert_eq!(blue, rgb!(0x3b, 0x82, 0xf6));
    /// ```
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Access the alpha.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Normalize this color's coordinates.
    ///
    /// Normalization replaces not-a-numbers with zero, clamps Oklab/Oklch
    /// lightness to unit range, and ensures that chroma is non-negative.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self {
            coordinates: normalize(self.space, &self.coordinates),
            ..self.clone()
        }
    }

    /// Convert this color to the target color space.
    ///
    /// # Approach
    ///
    /// A color space is usually defined through a conversion from and to
    /// another color space. The color module includes handwritten functions
    /// that implement just those single-hop conversions. The basic challenge
    /// for arbitrary conversions, as implemented by this method, is to find a
    /// path through the graph of single-hop conversions. Dijkstra's algorithm
    /// would certainly work. But the graph of single-hop conversions is static
    /// and very much tree-shaped, with XYZ D65 at its root. Hence this method
    /// first checks for conversions within the same branch, e.g., between HSL
    /// and sRGB or Oklch and Oklab, and otherwise converts to XYZ and from
    /// there to the target.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{assert_close_enough, Color, ColorSpace};
    /// let blue = Color::from_24bit(0x3b, 0x82, 0xf6).to(ColorSpace::Oklch);
    /// assert_close_enough!((blue[0] * 1e4).round(), 6231.0);
    /// assert_close_enough!((blue[1] * 1e4).round(), 1880.0);
    /// assert_close_enough!((blue[2] * 1e4).round(), 2598145.0);
    /// assert_eq!(blue.alpha(), 1.0);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self {
            space: target,
            coordinates: convert(self.space, target, &self.coordinates),
            alpha: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in-gamut for its color space.
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// assert!(red.in_gamut());
    ///
    /// let green = Color::p3(0.0, 1.0, 0.0);
    /// assert!(!green.to(ColorSpace::Srgb).in_gamut());
    /// ```
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates)
    }

    /// Clip this color to the gamut of its color space.
    ///
    /// # Examples
    ///
    /// Display P3's green primary is out of gamut in sRGB. Clipping the
    /// converted color does bring it into gamut, though the result may be a
    /// rough match for the original color.
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let too_green = Color::new(ColorSpace::DisplayP3, [0.0, 1.0, 0.0])
    ///     .to(ColorSpace::Srgb);
    /// assert!(!too_green.in_gamut());
    ///
    /// let green = too_green.clip();
    /// assert!(green.in_gamut());
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self {
            coordinates: clip(self.space, &self.coordinates),
            ..self.clone()
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to sRGB and clamps each coordinate to
    /// unit range before scaling it to a `u8`.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(
            ColorSpace::Srgb,
            &convert(self.space, ColorSpace::Srgb, &self.coordinates),
        )
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal representation.
    ///
    /// Like [`Color::to_24bit`], this method converts the color to a clipped
    /// sRGB color before formatting its coordinates in hashed hexadecimal
    /// notation. The alpha is not included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let pink = Color::p3(1, 0.2, 1).to(ColorSpace::Srgb);
    /// assert!(!pink.in_gamut());
    /// assert_eq!(pink.clip(), Color::srgb(1, 0, 1));
    /// assert_eq!(pink.to_hex_format(), "#ff00ff");
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Color {
    /// Create an instance of the default color.
    ///
    /// The chosen default for high-resolution colors is the origin in XYZ,
    /// i.e., pitch black.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// let default = Color::default();
    /// assert_eq!(default.space(), ColorSpace::Xyz);
    /// assert_eq!(default.as_ref(), &[0.0_f64, 0.0, 0.0]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes the *hashed notation* with three, four, six, or
    /// eight hexadecimal digits, e.g., `#123` or `#cafe0080`. The short forms
    /// repeat every digit, i.e., the red coordinate in `#123` is 0x11/0xff. The
    /// four and eight digit forms carry an alpha.
    ///
    /// It also recognizes the CSS named colors, including `transparent`, and
    /// the CSS color functions `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`,
    /// `lab()`, `lch()`, `oklab()`, `oklch()`, and `color()`. The legacy
    /// comma-separated syntax is supported for `rgb()` and `hsl()` as well as
    /// their aliases. Coordinates may be numbers, percentages, `none`, or, for
    /// hues, angles in `deg`, `grad`, `rad`, or `turn`. An `oklch()` without
    /// hue is treated as having hue `none`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    /// # use mujigae_color::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::srgb(
    ///     0.00392156862745098,
    ///     0.0784313725490196,
    ///     0.5019607843137255,
    /// ));
    ///
    /// let red: Color = str::parse("rgb(255 0 0 / 50%)")?;
    /// assert_eq!(red, Color::srgb(1, 0, 0).with_alpha(0.5));
    ///
    /// let purple: Color = "RebeccaPurple".parse()?;
    /// assert_eq!(purple.to_hex_format(), "#663399");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates, alpha)| Self {
            space,
            coordinates,
            alpha,
        })
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace};
    ///
    /// let purple = Color::srgb(0.5, 0.4, 0.75);
    /// assert_eq!(purple[2], 0.75);
    /// ```
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
        to_eq_bits(self.alpha).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both equality testing and hashing normalize coordinates and turn them
    /// into bit strings first, so that equal colors also have equal hashes.
    ///
    /// # Examples
    ///
    /// The following example code illustrates how equality testing handles
    /// not-a-numbers, numbers with very small differences, and hues:
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace, Float};
    /// let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));
    /// assert_eq!(
    ///     Color::srgb(Float::NAN, 4.0 * delta, 0.12 + delta),
    ///     Color::srgb(0,          5.0 * delta, 0.12        )
    /// );
    ///
    /// assert_eq!(Color::oklch(0.5, 0.1, 665), Color::oklch(0.5, 0.1, 305));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space || to_eq_bits(self.alpha) != to_eq_bits(other.alpha) {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}], {})",
            self.space, c1, c2, c3, self.alpha
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in CSS format using the CSS function for
    /// its color space and three space-separated coordinates, followed by the
    /// alpha for translucent colors. It respects the formatter's precision,
    /// defaulting to 5 digits past the decimal. Since hues are up to two orders
    /// of magnitude larger than other coordinates, this method uses a
    /// precision smaller by 2 for hues. It also writes not-a-numbers as `none`.
    /// The result always parses again.
    ///
    /// For the fixed-precision notations used by a palette editor, see
    /// [`Notation`](crate::Notation) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mujigae_color::{Color, ColorSpace::*};
    /// # use mujigae_color::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let lime = Color::from_str("#a1d2ae")?;
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    ///
    /// let gray = Color::oklch(0.665, 0, f64::NAN);
    /// assert_eq!(format!("{}", gray), "oklch(0.665 0 none)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, self.alpha, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::error::ColorFormatError;
    use crate::{assert_same_color, rgb, ColorSpace::*, Float};
    use std::collections::HashSet;

    #[test]
    fn test_alpha() -> Result<(), ColorFormatError> {
        let red: Color = "#ff000080".parse()?;
        assert!(!red.is_opaque());
        assert_eq!(red.to(Oklch).alpha(), red.alpha());
        assert_ne!(red, red.with_alpha(1.0));
        assert_eq!(Color::srgb(0, 0, 0).with_alpha(2.0).alpha(), 1.0);
        assert_eq!(Color::srgb(0, 0, 0).with_alpha(Float::NAN).alpha(), 0.0);
        Ok(())
    }

    #[test]
    fn test_hash() {
        let mut colors = HashSet::new();
        colors.insert(Color::oklch(0.5, 0.1, 665.0));
        colors.insert(Color::oklch(0.5, 0.1, 305.0));
        colors.insert(Color::oklch(0.5, 0.1, 305.0).with_alpha(0.5));
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn test_conversion() -> Result<(), ColorFormatError> {
        let blue = rgb!(0x3b, 0x82, 0xf6);
        for space in [Hsl, Hwb, Lab, Lch, Oklab, Oklch, DisplayP3, Rec2020, Xyz, XyzD50] {
            assert_eq!(blue.to(space).to_hex_format(), "#3b82f6", "{:?}", space);
        }
        assert_same_color!(blue.to(Srgb), blue);

        let gray: Color = "gray".parse()?;
        assert_eq!(gray.to_hex_format(), "#808080");
        Ok(())
    }

    #[test]
    fn test_to_24bit() {
        assert_eq!(Color::srgb(1.2, -0.1, Float::NAN).to_24bit(), [255, 0, 0]);
        assert_eq!(Color::hsl(120, 1, 0.5).to_hex_format(), "#00ff00");
        assert_eq!(Color::default().to_hex_format(), "#000000");
    }
}
