//! The light/dark theme preference.

use crate::error::StorageError;
use crate::persist::Storage;
use serde::{Deserialize, Serialize};

/// A user interface theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the other theme.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Get the theme's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeRecord {
    theme: Theme,
}

/// A store for the theme preference.
#[derive(Debug)]
pub struct ThemeStore<S: Storage> {
    storage: S,
    key: String,
    theme: Theme,
}

impl<S: Storage> ThemeStore<S> {
    /// Create a new theme store hydrated from the record with the given key.
    /// A missing or unreadable record results in the light theme.
    pub fn new(storage: S, key: &str) -> Self {
        let theme = match storage.load(key) {
            Ok(Some(text)) => match serde_json::from_str::<ThemeRecord>(&text) {
                Ok(record) => record.theme,
                Err(err) => {
                    log::warn!("Failed to parse theme, using default: {err}");
                    Theme::default()
                }
            },
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("Failed to load theme, using default: {err}");
                Theme::default()
            }
        };

        Self {
            storage,
            key: key.to_owned(),
            theme,
        }
    }

    /// Get the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist();
    }

    /// Switch between light and dark theme, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggle());
        self.theme
    }

    /// Save the current theme again.
    pub fn flush(&self) {
        self.persist();
    }

    fn persist(&self) {
        let record = ThemeRecord { theme: self.theme };
        let result = serde_json::to_string(&record)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.save(&self.key, &json));
        if let Err(err) = result {
            log::warn!("Failed to save theme under \"{}\": {err}", self.key);
        }
    }
}
