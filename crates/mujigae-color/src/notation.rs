//! The textual notations of a palette editor.
//!
//! Unlike [`Color`]'s `Display` implementation, which writes CSS with as much
//! precision as requested, the notations here have fixed precision and hence
//! produce stable, human-scale strings. All of them parse again.

use std::str::FromStr;

use crate::core::normalize_hue;
use crate::error::{EngineError, UnknownNotation};
use crate::{Color, ColorSpace, Float};

/// A textual color notation.
///
/// The default notation is hashed hexadecimal, which also serves as fallback
/// for unrecognized notation names.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Hashed hexadecimal, e.g., `#3b82f6`.
    #[default]
    Hex,
    /// Legacy CSS `rgb()`, e.g., `rgb(59, 130, 246)`.
    Rgb,
    /// Legacy CSS `hsl()`, e.g., `hsl(217.22, 91.22%, 59.8%)`.
    Hsl,
    /// CSS `oklch()`, e.g., `oklch(0.6231 0.1880 259.8145)`.
    Oklch,
    /// CSS `oklab()`, e.g., `oklab(0.6231 -0.0332 -0.1851)`.
    Oklab,
}

impl Notation {
    /// All notations, in the order a palette editor offers them.
    pub const ALL: [Notation; 5] = [
        Notation::Hex,
        Notation::Rgb,
        Notation::Hsl,
        Notation::Oklch,
        Notation::Oklab,
    ];

    /// Get this notation's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
            Self::Oklab => "oklab",
        }
    }

    /// Look up the notation with the given name, falling back on
    /// [`Notation::Hex`].
    ///
    /// ```
    /// # use mujigae_color::Notation;
    /// assert_eq!(Notation::from_name_or_hex(" OKLCH "), Notation::Oklch);
    /// assert_eq!(Notation::from_name_or_hex("cmyk"), Notation::Hex);
    /// ```
    pub fn from_name_or_hex(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Format the color in this notation.
    ///
    /// See [`format`] for details.
    pub fn format(&self, color: &Color) -> String {
        match *self {
            Self::Hex => color.to_hex_format(),
            Self::Rgb => format_rgb(color),
            Self::Hsl => format_hsl(color),
            Self::Oklch => format_oklch(color),
            Self::Oklab => format_oklab(color),
        }
    }
}

impl FromStr for Notation {
    type Err = UnknownNotation;

    /// Parse the notation name, ignoring case and surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.name() == name)
            .ok_or_else(|| UnknownNotation(s.to_owned()))
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color string together with its notation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormattedColor {
    pub format: Notation,
    pub data: String,
}

impl std::fmt::Display for FormattedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Round to two decimals.
#[inline]
fn round2(value: Float) -> Float {
    (value * 100.0).round() / 100.0
}

/// Write the number with at most two decimals and without trailing zeros.
fn fmt2(value: Float) -> String {
    let value = if value.is_nan() { 0.0 } else { round2(value) };
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Write the number with exactly four decimals. Not-a-number becomes zero and
/// zero never has a sign.
fn fmt4(value: Float) -> String {
    let value = if value.is_nan() { 0.0 } else { value };
    let s = format!("{:.4}", value);
    if s == "-0.0000" {
        "0.0000".to_string()
    } else {
        s
    }
}

/// Determine the alpha to write, if any. The decision is based on the rounded
/// value, so that formatting the parsed result again yields the same string.
fn visible_alpha(color: &Color) -> Option<Float> {
    let alpha = round2(color.alpha());
    if alpha < 1.0 {
        Some(alpha)
    } else {
        None
    }
}

fn format_rgb(color: &Color) -> String {
    let [r, g, b] = color.to_24bit();
    match visible_alpha(color) {
        Some(alpha) => format!("rgba({}, {}, {}, {})", r, g, b, fmt2(alpha)),
        None => format!("rgb({}, {}, {})", r, g, b),
    }
}

fn format_hsl(color: &Color) -> String {
    let [h, s, l] = color.to(ColorSpace::Hsl).coordinates();

    let h = if h.is_nan() { 0.0 } else { normalize_hue(h) };
    let h = if round2(h) >= 360.0 { 0.0 } else { h };
    let h = fmt2(h);
    let s = fmt2(s.clamp(0.0, 1.0) * 100.0);
    let l = fmt2(l.clamp(0.0, 1.0) * 100.0);

    match visible_alpha(color) {
        Some(alpha) => format!("hsla({}, {}%, {}%, {})", h, s, l, fmt2(alpha)),
        None => format!("hsl({}, {}%, {}%)", h, s, l),
    }
}

fn format_oklch(color: &Color) -> String {
    let [l, c, h] = color.to(ColorSpace::Oklch).coordinates();

    // The hue of a chroma that rounds to zero is noise.
    let c = fmt4(c);
    if c == "0.0000" {
        return format!("oklch({} {})", fmt4(l), c);
    }

    let h = if h.is_nan() { 0.0 } else { normalize_hue(h) };
    let h = if (h * 1e4).round() / 1e4 >= 360.0 {
        0.0
    } else {
        h
    };

    format!("oklch({} {} {})", fmt4(l), c, fmt4(h))
}

fn format_oklab(color: &Color) -> String {
    let [l, a, b] = color.to(ColorSpace::Oklab).coordinates();
    format!("oklab({} {} {})", fmt4(l), fmt4(a), fmt4(b))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the color in the target notation.
///
/// The notations render as follows:
///
///   * `hex` converts to sRGB, clamps each coordinate to unit range, and
///     writes lowercase `#rrggbb`. The alpha is dropped.
///   * `rgb` writes the same channels as `rgb(r, g, b)` or, for translucent
///     colors, `rgba(r, g, b, a)` with a two-decimal alpha.
///   * `hsl` writes the hue (zero for grays), saturation, and lightness with
///     at most two decimals as `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
///   * `oklch` writes `oklch(L C H)` with exactly four decimals each. If the
///     chroma rounds to zero, the hue is omitted, i.e., `oklch(L C)`.
///   * `oklab` writes `oklab(L a b)` with exactly four decimals each.
///
/// Undefined coordinates are written as zero, and zero is never negative.
///
/// ```
/// # use mujigae_color::{format, rgb, Notation};
/// let blue = rgb!(0x3b, 0x82, 0xf6);
/// assert_eq!(format(Notation::Oklch, &blue).data, "oklch(0.6231 0.1880 259.8145)");
/// assert_eq!(format(Notation::Hsl, &blue).data, "hsl(217.22, 91.22%, 59.8%)");
///
/// let gray = rgb!(0x80, 0x80, 0x80);
/// assert_eq!(format(Notation::Oklch, &gray).data, "oklch(0.5999 0.0000)");
/// ```
pub fn format(target: Notation, color: &Color) -> FormattedColor {
    FormattedColor {
        format: target,
        data: target.format(color),
    }
}

/// Format the color in the notation with the given name, falling back on
/// hashed hexadecimal for unknown names.
pub fn format_named(name: &str, color: &Color) -> FormattedColor {
    format(Notation::from_name_or_hex(name), color)
}

/// Parse the color string and determine its notation.
fn detect_color(text: &str) -> Result<(Notation, Color), EngineError> {
    let color = Color::from_str(text)?;
    let notation = match color.space() {
        ColorSpace::Srgb if text.trim_start().starts_with('#') => Notation::Hex,
        ColorSpace::Srgb => Notation::Rgb,
        ColorSpace::Hsl => Notation::Hsl,
        ColorSpace::Oklab => Notation::Oklab,
        ColorSpace::Oklch => Notation::Oklch,
        space => return Err(EngineError::UnsupportedMode(space)),
    };

    Ok((notation, color))
}

/// Determine the notation of the color string.
///
/// Hashed hexadecimal colors are `hex`, other sRGB colors including named
/// colors and `color(srgb ...)` are `rgb`, and HSL, Oklab, and Oklch colors
/// have their namesake notations. All other color spaces have no notation.
///
/// ```
/// # use mujigae_color::{detect, ColorSpace, Notation};
/// # use mujigae_color::error::EngineError;
/// assert_eq!(detect("#3B82F6"), Ok(Notation::Hex));
/// assert_eq!(detect("rebeccapurple"), Ok(Notation::Rgb));
/// assert_eq!(detect("oklch(0.5 0.1 120)"), Ok(Notation::Oklch));
/// assert_eq!(detect("lab(50 20 30)"), Err(EngineError::UnsupportedMode(ColorSpace::Lab)));
/// ```
pub fn detect(text: &str) -> Result<Notation, EngineError> {
    detect_color(text).map(|(notation, _)| notation)
}

/// Canonicalize the color string.
///
/// This function detects the color string's notation and formats the parsed
/// color in that notation again.
///
/// ```
/// # use mujigae_color::{canonicalize, Notation};
/// # use mujigae_color::error::EngineError;
/// let color = canonicalize("  RGB(59 130 246) ")?;
/// assert_eq!(color.format, Notation::Rgb);
/// assert_eq!(color.data, "rgb(59, 130, 246)");
/// # Ok::<(), EngineError>(())
/// ```
pub fn canonicalize(text: &str) -> Result<FormattedColor, EngineError> {
    let (notation, color) = detect_color(text)?;
    Ok(format(notation, &color))
}

// ====================================================================================================================
