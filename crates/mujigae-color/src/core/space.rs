/// The enumeration of supported color spaces.
///
/// # RGB
///
/// The engine supports three RGB color spaces. From smallest to largest gamut,
/// they are:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB), which has long served as the
///     default color space for the web. Its linear form is available, too.
///   * [Display P3](https://en.wikipedia.org/wiki/DCI-P3), which is
///     well-positioned to become sRGB's successor.
///   * [Rec. 2020](https://en.wikipedia.org/wiki/Rec._2020), which is the
///     standard color space for ultra-high-definition (UDH) video.
///
/// In-gamut coordinates range from 0 to 1, inclusive.
///
/// # HSL and HWB
///
/// HSL and HWB are cylindrical reparametrizations of sRGB. Their first
/// coordinate is the hue in degrees, the other two coordinates are fractions
/// in `0..=1`, i.e., saturation and lightness for HSL as well as whiteness and
/// blackness for HWB. Both share sRGB's gamut.
///
/// # CIELAB and Oklab
///
/// CIELAB with the D50 illuminant is supported with Cartesian (Lab) and polar
/// (Lch) coordinates. Lightness ranges `0..=100`.
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) improve on CIELAB
/// by using the D65 standard illuminant, which is also used by sRGB and Display
/// P3, and by avoiding visible distortions around the blues. Lightness ranges
/// `0..=1`. Oklab uses Cartesian coordinates a, b for colorness, with the a
/// axis varying red/green and the b axis varying blue/yellow. Oklch uses polar
/// coordinates C/h, with C expressing chroma and h or also hº expressing hue.
///
/// | Color space | Lightness | Colorness 1 | Colorness 2 |
/// | ----------- | :-------: | :---------: | :---------: |
/// | Oklab       | L         | a           | b           |
/// | Oklch       | L         | C           | hº          |
///
/// Valid coordinates observe the following invariants:
///
///   * The lightness is limited to `0..=1`.
///   * The a/b coordinates have no set limits, but in practice can be bounded
///     `-0.4..=0.4`.
///   * The chroma must be non-negative and in practice can be bounded
///     `0..=0.4`.
///   * The hue may be not-a-number, which indicates a powerless component,
///     i.e., gray tone.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// foundational color space. Notably, all conversions between unrelated color
/// spaces go through XYZ with the D65 illuminant. XYZ with the D50 illuminant
/// is available, too, and anchors CIELAB. Chromatic adaptation between the two
/// versions of XYZ uses the (linear) Bradford method.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Hsl,
    Hwb,
    DisplayP3,
    Rec2020,
    Lab,
    Lch,
    Oklab,
    Oklch,
    Xyz,
    XyzD50,
}

impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// Polar color spaces store their hue as the *third* coordinate. That is
    /// the case for Lch and Oklch.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Lch | Self::Oklch)
    }

    /// Determine whether this color space is cylindrical.
    ///
    /// Cylindrical color spaces store their hue as the *first* coordinate. That
    /// is the case for HSL and HWB.
    pub const fn is_cylindrical(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hwb)
    }

    /// Determine whether this color space has a hue coordinate.
    pub const fn has_hue(&self) -> bool {
        self.is_polar() || self.is_cylindrical()
    }

    /// Get the index of the hue coordinate, if this color space has one.
    pub const fn hue_index(&self) -> Option<usize> {
        if self.is_polar() {
            Some(2)
        } else if self.is_cylindrical() {
            Some(0)
        } else {
            None
        }
    }

    /// Determine whether this color space is XYZ.
    pub const fn is_xyz(&self) -> bool {
        matches!(*self, Self::Xyz | Self::XyzD50)
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        use ColorSpace::*;
        matches!(*self, Srgb | LinearSrgb | DisplayP3 | Rec2020)
    }

    /// Determine whether this color space is Oklab or Oklch.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Determine whether this color space is bounded.
    ///
    /// XYZ, CIELAB, and the Oklab variations are *unbounded* and hence can
    /// model any color. By contrast, RGB color spaces and their cylindrical
    /// reparametrizations are *bounded*.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb() || self.is_cylindrical()
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match *self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Hsl => "HSL",
            Hwb => "HWB",
            DisplayP3 => "Display P3",
            Rec2020 => "Rec. 2020",
            Lab => "CIELAB",
            Lch => "CIELCh",
            Oklab => "Oklab",
            Oklch => "Oklch",
            Xyz => "XYZ D65",
            XyzD50 => "XYZ D50",
        };

        f.write_str(s)
    }
}
