//! Helper module with the options for opening a session.
//!
//! This module provides the options for a [`Session`](crate::Session) and the
//! corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use mujigae::opt::Options;
//! # use std::path::Path;
//! let options = Options::builder()
//!     .data_dir(Path::new("/tmp/palettes"))
//!     .palette_key("brand")
//!     .build();
//!
//! assert_eq!(options.palette_key(), "brand");
//! assert_eq!(options.theme_key(), "theme");
//! ```

use crate::util::{Env, Environment};
use std::path::{Path, PathBuf};

/// The environment variable overriding the data directory.
pub const DATA_DIR_VARIABLE: &str = "MUJIGAE_DATA_DIR";

/// The default key of the palette record.
pub const PALETTE_KEY: &str = "palette-storage";

/// The default key of the theme record.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Debug)]
struct OptionData {
    data_dir: PathBuf,
    palette_key: String,
    theme_key: String,
}

impl OptionData {
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(".mujigae"),
            palette_key: PALETTE_KEY.to_owned(),
            theme_key: THEME_KEY.to_owned(),
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the directory holding the persisted records.
    pub fn data_dir(&mut self, dir: &Path) -> &mut Self {
        self.0.data_dir = dir.to_path_buf();
        self
    }

    /// Set the key of the palette record.
    pub fn palette_key(&mut self, key: &str) -> &mut Self {
        self.0.palette_key = key.to_owned();
        self
    }

    /// Set the key of the theme record.
    pub fn theme_key(&mut self, key: &str) -> &mut Self {
        self.0.theme_key = key.to_owned();
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with the data directory taken from
    /// the `MUJIGAE_DATA_DIR` environment variable, if it is set and not
    /// empty.
    pub fn from_environment() -> Options {
        Self::from_env(&Env::default())
    }

    pub(crate) fn from_env<E: Environment>(env: &E) -> Options {
        let mut builder = Self::builder();
        if env.is_non_empty(DATA_DIR_VARIABLE) {
            if let Some(dir) = env.read_os(DATA_DIR_VARIABLE) {
                builder.data_dir(Path::new(&dir));
            }
        }
        builder.build()
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.0.data_dir
    }

    /// Get the key of the palette record.
    pub fn palette_key(&self) -> &str {
        &self.0.palette_key
    }

    /// Get the key of the theme record.
    pub fn theme_key(&self) -> &str {
        &self.0.theme_key
    }
}
