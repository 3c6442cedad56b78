//! The palette's data model.
//!
//! A [`Palette`] is an ordered list of [`Row`]s, each an ordered list of
//! [`Swatch`]es, plus one [`ScaleLabels`] set shared by all rows. Rows and
//! swatches are addressed by their identifiers, never by their position.

use mujigae_color::error::{ColorFormatError, EngineError};
use mujigae_color::{canonicalize, detect, format, Color, FormattedColor, Notation};
use serde::{Deserialize, Serialize};

/// The placeholder name for rows whose name was committed empty.
pub const UNTITLED: &str = "Untitled";

/// The placeholder for descriptions committed empty. It also is the
/// description of newly added rows.
pub const DESCRIPTION: &str = "Description";

/// The placeholder for scale labels committed empty.
pub const DEFAULT_VALUE: &str = "500";

/// The name of newly added rows.
pub const NEW_ROW_NAME: &str = "Untitled Row";

/// The name of the row a fresh palette starts out with.
pub const PRIMARY_ROW_NAME: &str = "Primary";

/// The description of the row a fresh palette starts out with.
pub const PRIMARY_ROW_DESCRIPTION: &str = "Main brand colors";

/// The neutral grayscale that seeds new rows, from lightest to darkest.
pub const DEFAULT_GRAYSCALE: [&str; 11] = [
    "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040",
    "#262626", "#171717", "#0a0a0a",
];

/// The default scale labels, one per step of the default grayscale.
pub const DEFAULT_LABELS: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Prepare text from an inline editor for committing.
///
/// This function trims the text and substitutes the fallback if nothing is
/// left. The store itself stores names, descriptions, and labels verbatim.
///
/// ```
/// # use mujigae::model::{commit_text, UNTITLED};
/// assert_eq!(commit_text("  Accent ", UNTITLED), "Accent");
/// assert_eq!(commit_text(" \t ", UNTITLED), "Untitled");
/// ```
pub fn commit_text(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_owned()
    } else {
        value.to_owned()
    }
}

// --------------------------------------------------------------------------------------------------------------------

macro_rules! define_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh identifier from a random UUID.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_id!(
    /// A row's stable identifier.
    RowId
);

define_id!(
    /// A swatch's stable identifier.
    SwatchId
);

// --------------------------------------------------------------------------------------------------------------------

/// A color in a palette row.
///
/// A swatch's data always parses and is the canonical rendering of the color
/// in the swatch's notation. The identifier survives reordering and changes to
/// the color or notation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    id: SwatchId,
    format: Notation,
    data: String,
}

impl Swatch {
    /// Create a swatch with a fresh identifier for the formatted color.
    pub fn new(color: FormattedColor) -> Self {
        Self {
            id: SwatchId::generate(),
            format: color.format,
            data: color.data,
        }
    }

    /// Create a swatch with a fresh identifier for the color string, which is
    /// canonicalized first.
    ///
    /// ```
    /// # use mujigae::model::Swatch;
    /// # use mujigae_color::{error::EngineError, Notation};
    /// let swatch = Swatch::parse("RGB(59 130 246)")?;
    /// assert_eq!(swatch.format(), Notation::Rgb);
    /// assert_eq!(swatch.data(), "rgb(59, 130, 246)");
    /// # Ok::<(), EngineError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        canonicalize(text).map(Self::new)
    }

    /// Get the identifier.
    pub fn id(&self) -> &SwatchId {
        &self.id
    }

    /// Get the notation.
    pub fn format(&self) -> Notation {
        self.format
    }

    /// Get the color string.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Parse the color string.
    pub fn color(&self) -> Result<Color, ColorFormatError> {
        self.data.parse()
    }

    /// Determine whether the color string parses in the declared notation.
    pub fn is_valid(&self) -> bool {
        detect(&self.data).is_ok_and(|notation| notation == self.format)
    }

    /// Replace the color, keeping the identifier. This method returns whether
    /// anything changed.
    pub(crate) fn replace(&mut self, color: FormattedColor) -> bool {
        if self.format == color.format && self.data == color.data {
            return false;
        }

        self.format = color.format;
        self.data = color.data;
        true
    }

    /// Bring the color string back in line with the declared notation.
    ///
    /// A color string that does not parse in the declared notation but still
    /// parses as a color, e.g., hex data declared as `rgb`, is re-rendered in
    /// the declared notation. This method returns whether anything changed and
    /// fails only if the color string does not parse at all.
    pub(crate) fn repair(&mut self) -> Result<bool, ColorFormatError> {
        if self.is_valid() {
            return Ok(false);
        }

        self.convert(self.format)
    }

    /// Render the color in another notation, keeping the identifier.
    pub(crate) fn convert(&mut self, target: Notation) -> Result<bool, ColorFormatError> {
        let color = self.color()?;
        Ok(self.replace(format(target, &color)))
    }
}

/// Create the default grayscale with fresh identifiers.
pub fn default_colors() -> Vec<Swatch> {
    DEFAULT_GRAYSCALE
        .iter()
        .map(|hex| {
            Swatch::new(FormattedColor {
                format: Notation::Hex,
                data: (*hex).to_owned(),
            })
        })
        .collect()
}

// --------------------------------------------------------------------------------------------------------------------

/// A named row of colors, also called a scale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub(crate) id: RowId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) colors: Vec<Swatch>,
}

impl Row {
    /// Create a new row with a fresh identifier and the default grayscale.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            id: RowId::generate(),
            name: name.to_owned(),
            description: description.to_owned(),
            colors: default_colors(),
        }
    }

    /// Get the identifier.
    pub fn id(&self) -> &RowId {
        &self.id
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the colors.
    pub fn colors(&self) -> &[Swatch] {
        &self.colors
    }

    /// Find the color with the given identifier.
    pub fn color(&self, id: &SwatchId) -> Option<&Swatch> {
        self.colors.iter().find(|swatch| swatch.id == *id)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The scale labels shown above every row's colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleLabels {
    pub values: Vec<String>,
}

impl Default for ScaleLabels {
    fn default() -> Self {
        Self {
            values: DEFAULT_LABELS.iter().map(|v| (*v).to_owned()).collect(),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default)]
    pub(crate) values: ScaleLabels,
    pub(crate) rows: Vec<Row>,
}

impl Palette {
    /// Create a palette with the given rows and labels.
    pub fn new(rows: Vec<Row>, values: ScaleLabels) -> Self {
        Self { rows, values }
    }

    /// Get the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the scale labels.
    pub fn values(&self) -> &[String] {
        &self.values.values
    }

    /// Find the row with the given identifier.
    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == *id)
    }

    /// Find the color with the given identifier and the row containing it.
    pub fn find_color(&self, id: &SwatchId) -> Option<(&Row, &Swatch)> {
        self.rows
            .iter()
            .find_map(|row| row.color(id).map(|swatch| (row, swatch)))
    }

    pub(crate) fn row_mut(&mut self, id: &RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id == *id)
    }

    pub(crate) fn color_mut(&mut self, id: &SwatchId) -> Option<&mut Swatch> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.colors.iter_mut())
            .find(|swatch| swatch.id == *id)
    }

}

impl Default for Palette {
    /// Create a fresh palette with one row, the primary row, and the default
    /// scale labels.
    fn default() -> Self {
        Self {
            rows: vec![Row::new(PRIMARY_ROW_NAME, PRIMARY_ROW_DESCRIPTION)],
            values: ScaleLabels::default(),
        }
    }
}

// ====================================================================================================================
