//! Utility module with the color engine's errors.

use crate::ColorSpace;

/// An erroneous color format.
///
/// The variants identify what went wrong but not where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    /// A color format that is neither hashed hexadecimal, nor a named color,
    /// nor a known CSS color function. For example, `whatever(1 2 3)` is not a
    /// known format.
    #[error("color format should be hashed hex, a named color, or a CSS color function")]
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has a suitable length in bytes but contains an unsuitable
    /// character.
    #[error("color format should contain only valid ASCII characters")]
    UnexpectedCharacters,

    /// A hashed hexadecimal color with a non-hexadecimal digit. For example,
    /// `#efg` has a malformed third coordinate.
    #[error("color format coordinates should be hexadecimal integers but are not")]
    MalformedHex,

    /// A functional color format without the opening parenthesis. For example,
    /// `oklch 0.5 0.1 120)` is missing the opening parenthesis.
    #[error("color format should include an opening parenthesis but has none")]
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For example,
    /// `oklab(1 2 3` is missing the closing parenthesis.
    #[error("color format should include a closing parenthesis but has none")]
    NoClosingParenthesis,

    /// A `color()` function with an unknown color space. For example,
    /// `color(unknown 1 1 1)` uses an unknown color space.
    #[error("color format should have known color space but does not")]
    UnknownColorSpace,

    /// A color format that is missing a coordinate. For example, `rgb(1 2)` is
    /// missing the third coordinate, and `rgb(1 2 3 /)` the alpha.
    #[error("color format should have 3 coordinates but is missing one")]
    MissingCoordinate,

    /// A color format with more than three coordinates plus alpha. For
    /// example, `oklab(1 2 3 4)` has one coordinate too many.
    #[error("color format should have 3 coordinates but has more")]
    TooManyCoordinates,

    /// A coordinate that is not a number. For example, `oklab(1 0..1 0)` has a
    /// malformed second coordinate.
    #[error("color format coordinates should be numbers but are not")]
    MalformedNumber,

    /// A coordinate with a unit that does not fit. For example, `hsl(120%
    /// 50% 50%)` uses a percentage for the hue and `rgb(1deg 2 3)` an angle for
    /// the red channel.
    #[error("color format coordinate has an unexpected unit")]
    UnexpectedUnit,

    /// A color format mixing comma and space separators or using commas with a
    /// function that only supports space separators. For example, `rgb(1, 2 3)`
    /// and `oklab(1, 0, 0)` are both malformed.
    #[error("color format should consistently separate coordinates")]
    MixedSeparators,
}

/// An unknown notation name, e.g., `cmyk`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not the name of a notation")]
pub struct UnknownNotation(pub String);

/// An error while canonicalizing a color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The color string does not parse.
    #[error(transparent)]
    Parse(#[from] ColorFormatError),

    /// The color string parses but its color space has no notation, e.g.,
    /// `lab(50 20 30)` or `color(display-p3 1 0 0)`.
    #[error("colors in {0} have no editable notation")]
    UnsupportedMode(ColorSpace),
}
