//! Theme persistence
//!
//! A single durable key holding `"dark"` or `"light"`. The file store keeps
//! it as the sole content of one small file in the per-user config
//! directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Only the exact string `"dark"` selects the dark theme
    pub fn parse(value: &str) -> Self {
        if value == "dark" {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("theme store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait ThemeStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<ThemePreference>, StoreError>;

    fn save(&mut self, preference: ThemePreference) -> Result<(), StoreError>;
}

pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    const FILE_NAME: &'static str = "theme";

    /// Store inside `dir`, which is created on first save
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        FileThemeStore {
            path: dir.as_ref().join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(ThemePreference::parse(raw.trim()))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&mut self, preference: ThemePreference) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, preference.as_str()).map_err(|e| self.io_error(e))
    }
}

/// Keeps the preference for the lifetime of the process only
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    preference: Option<ThemePreference>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        Ok(self.preference)
    }

    fn save(&mut self, preference: ThemePreference) -> Result<(), StoreError> {
        self.preference = Some(preference);
        Ok(())
    }
}

/// File store under `dir` when there is one, otherwise an in-memory store
pub fn open(dir: Option<PathBuf>) -> Box<dyn ThemeStore> {
    match dir {
        Some(dir) => Box::new(FileThemeStore::in_dir(dir)),
        None => Box::new(MemoryThemeStore::default()),
    }
}
