use super::{from_24bit, named};
use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the three coordinates and the alpha as unsigned bytes. It
/// transparently handles single-digit coordinates and treats a missing alpha
/// as opaque.
fn parse_hashed(s: &str) -> Result<([u8; 3], u8), ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    if !digits.is_ascii() || !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let factor = if digits.len() <= 4 { 1 } else { 2 };
    let parse_coordinate = |index: usize| -> Result<u8, ColorFormatError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let c1 = parse_coordinate(0)?;
    let c2 = parse_coordinate(1)?;
    let c3 = parse_coordinate(2)?;
    let alpha = if digits.len() == 4 * factor {
        parse_coordinate(3)?
    } else {
        255
    };

    Ok(([c1, c2, c3], alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// A single argument to a CSS color function.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Component {
    None,
    Number(Float),
    Percentage(Float),
    /// An angle in degrees.
    Angle(Float),
}

impl Component {
    /// Resolve a channel. Plain numbers are divided by the divisor, whereas
    /// percentages are taken of the reference value.
    fn resolve(self, divisor: Float, reference: Float) -> Result<Float, ColorFormatError> {
        match self {
            Self::None => Ok(Float::NAN),
            Self::Number(n) => Ok(n / divisor),
            Self::Percentage(p) => Ok(p / 100.0 * reference),
            Self::Angle(_) => Err(ColorFormatError::UnexpectedUnit),
        }
    }

    /// Resolve a hue in degrees.
    fn resolve_hue(self) -> Result<Float, ColorFormatError> {
        match self {
            Self::None => Ok(Float::NAN),
            Self::Number(n) | Self::Angle(n) => Ok(n),
            Self::Percentage(_) => Err(ColorFormatError::UnexpectedUnit),
        }
    }

    /// Resolve an alpha, which is clamped to unit range.
    fn resolve_alpha(self) -> Result<Float, ColorFormatError> {
        match self {
            Self::None => Ok(0.0),
            Self::Number(n) => Ok(n.clamp(0.0, 1.0)),
            Self::Percentage(p) => Ok((p / 100.0).clamp(0.0, 1.0)),
            Self::Angle(_) => Err(ColorFormatError::UnexpectedUnit),
        }
    }
}

/// Parse a number without unit. Unlike Rust's own parser, this function does
/// not accept `inf` or `nan`.
fn parse_number(s: &str) -> Result<Float, ColorFormatError> {
    if s.is_empty()
        || !s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e'))
    {
        return Err(ColorFormatError::MalformedNumber);
    }

    let n: Float = s.parse().map_err(|_| ColorFormatError::MalformedNumber)?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ColorFormatError::MalformedNumber)
    }
}

/// Parse a function argument. The legacy comma syntax does not support
/// `none`.
fn parse_component(token: &str, legacy: bool) -> Result<Component, ColorFormatError> {
    if token == "none" {
        if legacy {
            Err(ColorFormatError::MalformedNumber)
        } else {
            Ok(Component::None)
        }
    } else if let Some(t) = token.strip_suffix('%') {
        Ok(Component::Percentage(parse_number(t)?))
    } else if let Some(t) = token.strip_suffix("deg") {
        Ok(Component::Angle(parse_number(t)?))
    } else if let Some(t) = token.strip_suffix("grad") {
        Ok(Component::Angle(parse_number(t)? * 0.9))
    } else if let Some(t) = token.strip_suffix("rad") {
        Ok(Component::Angle(parse_number(t)?.to_degrees()))
    } else if let Some(t) = token.strip_suffix("turn") {
        Ok(Component::Angle(parse_number(t)? * 360.0))
    } else {
        Ok(Component::Number(parse_number(token)?))
    }
}

/// The tokenized arguments of a CSS color function.
#[derive(Debug)]
struct Arguments<'a> {
    coordinates: Vec<&'a str>,
    alpha: Option<&'a str>,
    legacy: bool,
}

/// Split the body of a CSS color function into its arguments. Commas select
/// the legacy syntax, which requires commas between all arguments and does
/// not support a slash before the alpha.
fn split_arguments(body: &str, allow_legacy: bool) -> Result<Arguments<'_>, ColorFormatError> {
    if body.contains(',') {
        if !allow_legacy || body.contains('/') {
            return Err(ColorFormatError::MixedSeparators);
        }

        let mut coordinates: Vec<&str> = body.split(',').map(str::trim).collect();
        if coordinates.iter().any(|t| t.is_empty()) {
            return Err(ColorFormatError::MissingCoordinate);
        } else if coordinates.iter().any(|t| t.contains(char::is_whitespace)) {
            return Err(ColorFormatError::MixedSeparators);
        }

        let alpha = if coordinates.len() == 4 {
            coordinates.pop()
        } else {
            None
        };

        return Ok(Arguments {
            coordinates,
            alpha,
            legacy: true,
        });
    }

    let mut halves = body.split('/');
    let coordinates = halves.next().unwrap_or("").split_whitespace().collect();
    let alpha = match halves.next() {
        None => None,
        Some(text) => {
            let mut tokens = text.split_whitespace();
            let token = tokens.next().ok_or(ColorFormatError::MissingCoordinate)?;
            if tokens.next().is_some() {
                return Err(ColorFormatError::TooManyCoordinates);
            }
            Some(token)
        }
    };
    if halves.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok(Arguments {
        coordinates,
        alpha,
        legacy: false,
    })
}

/// The color spaces supported by the `color()` function.
const COLOR_SPACES: [(&str, ColorSpace); 7] = [
    ("srgb", ColorSpace::Srgb),
    ("srgb-linear", ColorSpace::LinearSrgb),
    ("display-p3", ColorSpace::DisplayP3),
    ("rec2020", ColorSpace::Rec2020),
    ("xyz", ColorSpace::Xyz),
    ("xyz-d65", ColorSpace::Xyz),
    ("xyz-d50", ColorSpace::XyzD50),
];

/// The names of supported CSS color functions.
const FUNCTIONS: [&str; 10] = [
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// Parse a CSS color function, given its name and the text between the
/// parentheses.
fn parse_function(name: &str, body: &str) -> Result<(ColorSpace, [Float; 3], Float), ColorFormatError> {
    use ColorSpace::*;

    let (space, body) = match name {
        "rgb" | "rgba" => (Srgb, body),
        "hsl" | "hsla" => (Hsl, body),
        "hwb" => (Hwb, body),
        "lab" => (Lab, body),
        "lch" => (Lch, body),
        "oklab" => (Oklab, body),
        "oklch" => (Oklch, body),
        "color" => {
            let body = body.trim_start();
            let end = body.find(char::is_whitespace).unwrap_or(body.len());
            let (ident, rest) = body.split_at(end);
            let space = COLOR_SPACES
                .iter()
                .find(|(n, _)| *n == ident)
                .map(|(_, s)| *s)
                .ok_or(ColorFormatError::UnknownColorSpace)?;
            (space, rest)
        }
        _ => return Err(ColorFormatError::UnknownFormat),
    };

    let arguments = split_arguments(body, matches!(name, "rgb" | "rgba" | "hsl" | "hsla"))?;

    // Oklch is the only function whose hue may be omitted.
    let minimum = if name == "oklch" { 2 } else { 3 };
    let count = arguments.coordinates.len();
    if count < minimum {
        return Err(ColorFormatError::MissingCoordinate);
    } else if 3 < count {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    let mut components = [Component::None; 3];
    for (index, token) in arguments.coordinates.iter().enumerate() {
        components[index] = parse_component(token, arguments.legacy)?;
    }
    let [c1, c2, c3] = components;

    let coordinates = match name {
        "rgb" | "rgba" => [
            c1.resolve(255.0, 1.0)?,
            c2.resolve(255.0, 1.0)?,
            c3.resolve(255.0, 1.0)?,
        ],
        "hsl" | "hsla" | "hwb" => [
            c1.resolve_hue()?,
            c2.resolve(100.0, 1.0)?,
            c3.resolve(100.0, 1.0)?,
        ],
        "lab" => [
            c1.resolve(1.0, 100.0)?.clamp(0.0, 100.0),
            c2.resolve(1.0, 125.0)?,
            c3.resolve(1.0, 125.0)?,
        ],
        "lch" => [
            c1.resolve(1.0, 100.0)?.clamp(0.0, 100.0),
            c2.resolve(1.0, 150.0)?.max(0.0),
            c3.resolve_hue()?,
        ],
        "oklab" => [
            c1.resolve(1.0, 1.0)?.clamp(0.0, 1.0),
            c2.resolve(1.0, 0.4)?,
            c3.resolve(1.0, 0.4)?,
        ],
        "oklch" => [
            c1.resolve(1.0, 1.0)?.clamp(0.0, 1.0),
            c2.resolve(1.0, 0.4)?.max(0.0),
            c3.resolve_hue()?,
        ],
        _ => [
            c1.resolve(1.0, 1.0)?,
            c2.resolve(1.0, 1.0)?,
            c3.resolve(1.0, 1.0)?,
        ],
    };

    let alpha = match arguments.alpha {
        Some(token) => parse_component(token, arguments.legacy)?.resolve_alpha()?,
        None => 1.0,
    };

    Ok((space, coordinates, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal with 3, 4, 6, or 8 digits, the
/// CSS named colors including `transparent`, and the CSS color functions
/// `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `lab()`, `lch()`,
/// `oklab()`, `oklch()`, and `color()`. Before parsing, it trims leading and
/// trailing white space and converts ASCII letters to lowercase. If
/// successful, it returns the color space, coordinates, and alpha.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3], Float), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let ([c1, c2, c3], alpha) = parse_hashed(s)?;
        Ok((
            ColorSpace::Srgb,
            from_24bit(c1, c2, c3),
            alpha as Float / 255.0,
        ))
    } else if let Some((name, rest)) = s.split_once('(') {
        let body = rest
            .strip_suffix(')')
            .ok_or(ColorFormatError::NoClosingParenthesis)?;
        parse_function(name.trim_end(), body)
    } else if s == "transparent" {
        Ok((ColorSpace::Srgb, [0.0, 0.0, 0.0], 0.0))
    } else if let Some([c1, c2, c3]) = named::lookup(s) {
        Ok((ColorSpace::Srgb, from_24bit(c1, c2, c3), 1.0))
    } else if FUNCTIONS.iter().any(|n| s.starts_with(n)) {
        Err(ColorFormatError::NoOpeningParenthesis)
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(space: ColorSpace) -> &'static str {
    use ColorSpace::*;
    match space {
        Srgb => "color(srgb ",
        LinearSrgb => "color(srgb-linear ",
        Hsl => "hsl(",
        Hwb => "hwb(",
        DisplayP3 => "color(display-p3 ",
        Rec2020 => "color(rec2020 ",
        Lab => "lab(",
        Lch => "lch(",
        Oklab => "oklab(",
        Oklch => "oklch(",
        Xyz => "color(xyz ",
        XyzD50 => "color(xyz-d50 ",
    }
}

/// Write the number with the given rounding factor but without trailing
/// zeros.
fn write_number(value: Float, factor: Float, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // CSS mandates NO trailing zeros whatsoever. But formatting floats with a
    // precision produces trailing zeros. Rounding avoids them, for the most
    // part. If the fractional part is zero, we do need an explicit
    // precision---of zero!
    let mut c = (value * factor).round() / factor;
    if c == 0.0 {
        c = 0.0; // Too much negativity!
    }

    if c == c.trunc() {
        f.write_fmt(format_args!("{:.0}", c))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

/// Format the color as a string.
///
/// This function formats the given cooordinates for the given color space as a
/// CSS color with space-separated arguments. It respects the formatter's
/// precision, defaulting to 5 digits past the decimal. Since hues are up to
/// two orders of magnitude larger than other coordinates, this function uses a
/// precision smaller by 2 for hues. HSL and HWB coordinates other than the hue
/// are written as percentages. The alpha is written only if the color is not
/// opaque.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    alpha: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(css_prefix(space))?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else if space.hue_index() == Some(index) {
            write_number(*coordinate, factor / 100.0, f)?;
        } else if space.is_cylindrical() {
            write_number(*coordinate * 100.0, factor / 100.0, f)?;
            f.write_str("%")?;
        } else {
            write_number(*coordinate, factor, f)?;
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    if alpha < 1.0 {
        f.write_str(" / ")?;
        write_number(alpha, factor, f)?;
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_component, parse_hashed, split_arguments, Component};
    use crate::error::ColorFormatError;
    use crate::{assert_close_enough, ColorSpace::*, Float};

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, ([0x11_u8, 0x22, 0x33], 0xff));
        assert_eq!(parse_hashed("#112233")?, ([0x11_u8, 0x22, 0x33], 0xff));
        assert_eq!(parse_hashed("#1234")?, ([0x11_u8, 0x22, 0x33], 0x44));
        assert_eq!(parse_hashed("#11223380")?, ([0x11_u8, 0x22, 0x33], 0x80));
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#12345"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(
            parse_hashed("#+fffffff"),
            Err(ColorFormatError::MalformedHex)
        );

        Ok(())
    }

    #[test]
    fn test_parse_component() -> Result<(), ColorFormatError> {
        assert_eq!(parse_component("none", false)?, Component::None);
        assert_eq!(parse_component("42", false)?, Component::Number(42.0));
        assert_eq!(parse_component("-.5", false)?, Component::Number(-0.5));
        assert_eq!(parse_component("1e2", false)?, Component::Number(100.0));
        assert_eq!(parse_component("50%", false)?, Component::Percentage(50.0));
        assert_eq!(parse_component("90deg", false)?, Component::Angle(90.0));
        assert_eq!(parse_component("0.25turn", false)?, Component::Angle(90.0));

        let Component::Angle(degrees) = parse_component("100grad", false)? else {
            panic!("grad should parse as angle");
        };
        assert_close_enough!(degrees, 90.0);
        let Component::Angle(degrees) = parse_component("3.141592653589793rad", false)? else {
            panic!("rad should parse as angle");
        };
        assert_close_enough!(degrees, 180.0);

        assert_eq!(
            parse_component("none", true),
            Err(ColorFormatError::MalformedNumber)
        );
        for token in ["", "inf", "nan", "1e999", "0..1", "12px", "%"] {
            assert_eq!(
                parse_component(token, false),
                Err(ColorFormatError::MalformedNumber),
                "{:?}",
                token
            );
        }

        Ok(())
    }

    #[test]
    fn test_split_arguments() -> Result<(), ColorFormatError> {
        let arguments = split_arguments(" 1 2  3 /  0.5 ", false)?;
        assert_eq!(arguments.coordinates, vec!["1", "2", "3"]);
        assert_eq!(arguments.alpha, Some("0.5"));
        assert!(!arguments.legacy);

        let arguments = split_arguments("1 , 2,3 , 50%", true)?;
        assert_eq!(arguments.coordinates, vec!["1", "2", "3"]);
        assert_eq!(arguments.alpha, Some("50%"));
        assert!(arguments.legacy);

        assert_eq!(
            split_arguments("1, 2, 3", false).map(|_| ()),
            Err(ColorFormatError::MixedSeparators)
        );
        assert_eq!(
            split_arguments("1, 2 3", true).map(|_| ()),
            Err(ColorFormatError::MixedSeparators)
        );
        assert_eq!(
            split_arguments("1, 2, 3 / 1", true).map(|_| ()),
            Err(ColorFormatError::MixedSeparators)
        );
        assert_eq!(
            split_arguments("1,, 3", true).map(|_| ()),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            split_arguments("1 2 3 /", false).map(|_| ()),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            split_arguments("1 2 3 / 1 / 1", false).map(|_| ()),
            Err(ColorFormatError::TooManyCoordinates)
        );

        Ok(())
    }

    #[test]
    fn test_parse_hex_and_named() -> Result<(), ColorFormatError> {
        assert_eq!(parse("  #FF0000 ")?, (Srgb, [1.0, 0.0, 0.0], 1.0));
        assert_eq!(parse("#00f")?, (Srgb, [0.0, 0.0, 1.0], 1.0));
        assert_eq!(
            parse("#0000ff80")?,
            (Srgb, [0.0, 0.0, 1.0], 128.0 / 255.0)
        );
        assert_eq!(parse("Red")?, (Srgb, [1.0, 0.0, 0.0], 1.0));
        assert_eq!(parse("white")?, (Srgb, [1.0, 1.0, 1.0], 1.0));
        assert_eq!(parse("transparent")?, (Srgb, [0.0, 0.0, 0.0], 0.0));
        assert_eq!(parse("reddish"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse(""), Err(ColorFormatError::UnknownFormat));

        Ok(())
    }

    #[test]
    fn test_parse_rgb_hsl_hwb() -> Result<(), ColorFormatError> {
        assert_eq!(parse("rgb(255 0 0)")?, (Srgb, [1.0, 0.0, 0.0], 1.0));
        assert_eq!(parse("rgb(255, 0, 255)")?, (Srgb, [1.0, 0.0, 1.0], 1.0));
        assert_eq!(
            parse("rgba(0, 0, 0, 0.25)")?,
            (Srgb, [0.0, 0.0, 0.0], 0.25)
        );
        assert_eq!(
            parse("rgb(50% 0% 100% / 50%)")?,
            (Srgb, [0.5, 0.0, 1.0], 0.5)
        );
        assert_eq!(parse("rgb(0 0 0 / 2)")?, (Srgb, [0.0, 0.0, 0.0], 1.0));

        assert_eq!(parse("hsl(120 50% 25%)")?, (Hsl, [120.0, 0.5, 0.25], 1.0));
        assert_eq!(
            parse("hsl(120deg, 50%, 25%)")?,
            (Hsl, [120.0, 0.5, 0.25], 1.0)
        );
        assert_eq!(
            parse("hsla(0.5turn, 50%, 50%, 0.5)")?,
            (Hsl, [180.0, 0.5, 0.5], 0.5)
        );
        assert_eq!(parse("hwb(90 25 50)")?, (Hwb, [90.0, 0.25, 0.5], 1.0));

        let (space, [h, s, l], _) = parse("hsl(none 0% 50%)")?;
        assert_eq!(space, Hsl);
        assert!(h.is_nan());
        assert_eq!([s, l], [0.0, 0.5]);

        assert_eq!(
            parse("hsl(50% 50% 50%)"),
            Err(ColorFormatError::UnexpectedUnit)
        );
        assert_eq!(
            parse("rgb(1deg 2 3)"),
            Err(ColorFormatError::UnexpectedUnit)
        );
        assert_eq!(
            parse("hwb(90, 25%, 50%)"),
            Err(ColorFormatError::MixedSeparators)
        );
        assert_eq!(parse("rgb(1 2)"), Err(ColorFormatError::MissingCoordinate));
        assert_eq!(
            parse("rgb(1 2 3 4)"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(
            parse("rgb(1 2 3"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse("rgb 1 2 3)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );

        Ok(())
    }

    #[test]
    fn test_parse_lab_and_oklab() -> Result<(), ColorFormatError> {
        assert_eq!(
            parse("lab(50% 100% -100%)")?,
            (Lab, [50.0, 125.0, -125.0], 1.0)
        );
        assert_eq!(parse("lab(120 0 0)")?, (Lab, [100.0, 0.0, 0.0], 1.0));
        assert_eq!(parse("lch(50 -10 30)")?, (Lch, [50.0, 0.0, 30.0], 1.0));
        assert_eq!(
            parse("oklab(50% 100% -50%)")?,
            (Oklab, [0.5, 0.4, -0.2], 1.0)
        );
        assert_eq!(
            parse("OKLCH(0.6231 0.1880 259.8145)")?,
            (Oklch, [0.6231, 0.188, 259.8145], 1.0)
        );
        assert_eq!(parse("oklch(1.5 0.1 90)")?, (Oklch, [1.0, 0.1, 90.0], 1.0));

        let (space, [l, c, h], alpha) = parse("oklch(0.5999 0.0000)")?;
        assert_eq!(space, Oklch);
        assert_eq!([l, c, alpha], [0.5999, 0.0, 1.0]);
        assert!(h.is_nan());

        assert_eq!(
            parse("oklab(0.5 0.1)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse("oklch(0.5)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse("oklab(1, 0, 0)"),
            Err(ColorFormatError::MixedSeparators)
        );
        assert_eq!(
            parse("oklab(1 0..1 0)"),
            Err(ColorFormatError::MalformedNumber)
        );

        Ok(())
    }

    #[test]
    fn test_parse_color_function() -> Result<(), ColorFormatError> {
        assert_eq!(parse("color(xyz   1  1  1)")?, (Xyz, [1.0, 1.0, 1.0], 1.0));
        assert_eq!(
            parse("color(xyz-d65 1 1 1)")?,
            (Xyz, [1.0, 1.0, 1.0], 1.0)
        );
        assert_eq!(
            parse("  COLOR  (  Display-P3   1  0.5  0.25  /  25% )  ")?,
            (DisplayP3, [1.0, 0.5, 0.25], 0.25)
        );
        assert_eq!(
            parse("color(srgb-linear 50% 0 1)")?,
            (LinearSrgb, [0.5, 0.0, 1.0], 1.0)
        );
        assert_eq!(
            parse("color(nemo 1 1 1)"),
            Err(ColorFormatError::UnknownColorSpace)
        );
        assert_eq!(
            parse("whatever(1 1 1)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse("color(srgb 1)"),
            Err(ColorFormatError::MissingCoordinate)
        );

        Ok(())
    }

    #[test]
    fn test_format() {
        // Color as Display directly invokes format().
        use crate::Color;

        let clr = Color::srgb(0.3, 0.336, 0.123456);
        assert_eq!(clr.to_string(), "color(srgb 0.3 0.336 0.12346)");
        assert_eq!(format!("{:.2}", clr), "color(srgb 0.3 0.34 0.12)");
        assert_eq!(Color::oklab(1.0, 0.0, -0.0).to_string(), "oklab(1 0 0)");
        assert_eq!(
            Color::oklch(0.5, 0.1, 167.0).to_string(),
            "oklch(0.5 0.1 167)"
        );
        assert_eq!(
            Color::oklch(0.5, 0.0, Float::NAN).to_string(),
            "oklch(0.5 0 none)"
        );
        assert_eq!(
            Color::new(Hsl, [120.0, 0.5, 0.25]).to_string(),
            "hsl(120 50% 25%)"
        );
        assert_eq!(
            Color::srgb(1.0, 0.0, 0.0).with_alpha(0.5).to_string(),
            "color(srgb 1 0 0 / 0.5)"
        );
    }

    #[test]
    fn test_format_parses() -> Result<(), ColorFormatError> {
        use crate::Color;

        for text in [
            "hsl(120 50% 25%)",
            "hwb(30 10% 20% / 0.5)",
            "lab(50 20 -30)",
            "color(rec2020 0.1 0.2 0.3)",
            "oklch(0.5 0 none)",
        ] {
            let color: Color = text.parse()?;
            assert_eq!(color.to_string(), text);
        }

        Ok(())
    }
}
