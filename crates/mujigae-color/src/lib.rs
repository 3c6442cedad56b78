//! # Mujigae Color
//!
//! Mujigae color is the color engine behind the mujigae palette editor. It
//! parses CSS color strings, converts between color spaces, and renders colors
//! in the five notations a palette editor offers its users.
//!
//!
//! ## 1. Overview
//!
//! The engine's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates and an alpha. Its
//!     methods expose conversion between color spaces as well as gamut testing
//!     and clipping. It parses from CSS strings via `FromStr`.
//!   * [`Notation`] enumerates the **textual notations** `hex`, `rgb`, `hsl`,
//!     `oklch`, and `oklab`. [`format`] renders a color in one of them with
//!     fixed precision, producing a [`FormattedColor`].
//!   * [`detect`] determines the notation of a color string and
//!     [`canonicalize`] re-renders the string in its own notation.
//!
//! The engine is stateless and performs no I/O. All functions are pure.
//!
//!
//! ## 2. Parse, Convert, Format
//!
//! ```
//! # use mujigae_color::{canonicalize, format, Color, ColorSpace, Notation};
//! # use mujigae_color::error::EngineError;
//! // Parse any CSS color
//! let blue: Color = "#3b82f6".parse()?;
//!
//! // Convert between color spaces
//! let same_blue = blue.to(ColorSpace::Oklch);
//! assert_eq!(same_blue.to_hex_format(), "#3b82f6");
//!
//! // Render in a palette notation
//! assert_eq!(format(Notation::Oklch, &blue).data, "oklch(0.6231 0.1880 259.8145)");
//!
//! // Or clean up user input
//! let edited = canonicalize("oklch(62.31% 0.188 259.8145deg)")?;
//! assert_eq!(edited.format, Notation::Oklch);
//! assert_eq!(edited.data, "oklch(0.6231 0.1880 259.8145)");
//! # Ok::<(), EngineError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Mujigae color supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives `Serialize` and `Deserialize` for [`ColorSpace`],
//!     [`Notation`], and [`FormattedColor`]. Notations serialize as their
//!     lowercase names. This feature is disabled by default.
//!
//!
//! ## 4. Acknowledgements
//!
//! The conversion formulae follow [Color.js](https://colorjs.io) and the
//! [CSS Color 4](https://www.w3.org/TR/css-color-4/) specification, and the
//! Oklab color space is [Björn Ottosson's](https://bottosson.github.io/posts/oklab/).

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod notation;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::ColorSpace;
pub use notation::{canonicalize, detect, format, format_named, FormattedColor, Notation};
pub use object::Color;
