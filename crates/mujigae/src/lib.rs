//! # Mujigae
//!
//! Mujigae is the state behind a color palette editor. A palette is a list of
//! named rows, each holding a scale of colors, with one set of scale labels
//! shared by all rows. This crate owns that state, keeps it consistent, and
//! persists it. Parsing and formatting colors is the job of the
//! [`mujigae_color`] crate.
//!
//!
//! ## 1. Overview
//!
//! The crate's main abstractions are:
//!
//!   * [`PaletteStore`] owns the palette and the current color selection. It
//!     implements adding, deleting, and reordering rows, reordering colors
//!     within rows, editing names, descriptions, and labels, as well as
//!     editing colors. Every operation either fully applies or does nothing.
//!   * [`ThemeStore`] owns the light/dark [`Theme`] preference.
//!   * [`Storage`] is the key-value interface both stores
//!     persist to after every mutation, with [`MemoryStorage`] and
//!     [`FileStorage`] as implementations.
//!   * [`Session`] bundles both stores on one storage and is configured with
//!     [`Options`](opt::Options).
//!
//! Rows and colors have stable identifiers, [`RowId`] and [`SwatchId`], that
//! survive reordering as well as changes to color and notation.
//!
//!
//! ## 2. Editing a Palette
//!
//! ```
//! # use mujigae::{MemoryStorage, PaletteStore};
//! let mut store = PaletteStore::new(MemoryStorage::new(), "palette-storage");
//! let row = store.add_row();
//! let swatch = store.row(&row).unwrap().colors()[0].id().clone();
//!
//! // Color edits are canonicalized...
//! assert!(store.update_color(&swatch, "RGB(59 130 246)"));
//! assert_eq!(store.find_color(&swatch).unwrap().1.data(), "rgb(59, 130, 246)");
//!
//! // ...and invalid input is ignored.
//! assert!(!store.update_color(&swatch, "rgb(59 130"));
//! assert_eq!(store.find_color(&swatch).unwrap().1.data(), "rgb(59, 130, 246)");
//! ```
//!
//!
//! ## 3. Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: rejected
//! edits at debug level and storage failures at warn level. It does not
//! install a logger.

pub mod error;
pub mod model;
pub mod opt;
mod persist;
mod session;
mod store;
mod theme;
mod util;

pub use model::{Palette, Row, RowId, ScaleLabels, Swatch, SwatchId};
pub use persist::{FileStorage, MemoryStorage, PaletteSnapshot, Storage};
pub use session::Session;
pub use store::PaletteStore;
pub use theme::{Theme, ThemeStore};
