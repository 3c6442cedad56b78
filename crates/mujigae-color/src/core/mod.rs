mod conversion;
mod equality;
mod gamut;
pub(crate) mod math;
mod named;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// gamut
pub(crate) use gamut::{clip, in_gamut};

// math
pub(crate) use math::{normalize_hue, FloatExt};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
