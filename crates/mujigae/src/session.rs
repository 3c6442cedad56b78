//! An editing session bundling the palette and theme stores.

use crate::opt::Options;
use crate::persist::{FileStorage, Storage};
use crate::store::PaletteStore;
use crate::theme::ThemeStore;

/// An editing session.
///
/// A session hydrates both stores from the same storage when opened. Stores
/// save after every mutation, so [`Session::flush`] only needs to run once,
/// at teardown, to write back state that was hydrated but never mutated.
#[derive(Debug)]
pub struct Session<S: Storage + Clone> {
    palette: PaletteStore<S>,
    theme: ThemeStore<S>,
}

impl<S: Storage + Clone> Session<S> {
    /// Create a new session on the given storage.
    pub fn new(storage: &S, options: &Options) -> Self {
        Self {
            palette: PaletteStore::new(storage.clone(), options.palette_key()),
            theme: ThemeStore::new(storage.clone(), options.theme_key()),
        }
    }

    /// Get the palette store.
    pub fn palette(&self) -> &PaletteStore<S> {
        &self.palette
    }

    /// Get the mutable palette store.
    pub fn palette_mut(&mut self) -> &mut PaletteStore<S> {
        &mut self.palette
    }

    /// Get the theme store.
    pub fn theme(&self) -> &ThemeStore<S> {
        &self.theme
    }

    /// Get the mutable theme store.
    pub fn theme_mut(&mut self) -> &mut ThemeStore<S> {
        &mut self.theme
    }

    /// Save both stores. Repeated calls write the same records.
    pub fn flush(&self) {
        self.palette.flush();
        self.theme.flush();
    }
}

impl Session<FileStorage> {
    /// Open a session on files in the configured data directory.
    ///
    /// ```
    /// # use mujigae::{opt::Options, Session};
    /// # let dir = tempfile::tempdir()?;
    /// let options = Options::builder().data_dir(dir.path()).build();
    /// let mut session = Session::open(&options);
    /// let id = session.palette_mut().add_row();
    ///
    /// let session = Session::open(&options);
    /// assert!(session.palette().row(&id).is_some());
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn open(options: &Options) -> Self {
        log::debug!("Opening session in {}", options.data_dir().display());
        Self::new(&FileStorage::new(options.data_dir()), options)
    }
}
