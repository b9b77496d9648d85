//! Theme resolution.
//!
//! A theme is a named layout file. The name is resolved to
//! `<dir>/<name>.tmpl.html`; the conversion fails if no such file exists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Default directory searched for layout files, relative to the process
/// working directory.
pub const THEME_DIR: &str = "themes";

/// File extension of layout files.
pub const THEME_EXTENSION: &str = ".tmpl.html";

/// A loaded layout, ready to be rendered.
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    source: String,
}

impl Theme {
    /// Resolves `name` inside `dir` and reads the layout source.
    ///
    /// # Errors
    ///
    /// [`RenderError::ThemeNotFound`] if no layout file exists for the
    /// name, [`RenderError::ThemeRead`] if the file cannot be read.
    pub fn load_in(dir: impl AsRef<Path>, name: &str) -> Result<Self, RenderError> {
        let path = Self::path_in(dir, name);

        if !path.is_file() {
            return Err(RenderError::ThemeNotFound {
                name: name.to_string(),
                path,
            });
        }

        let source = fs::read_to_string(&path).map_err(|source| RenderError::ThemeRead {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            name: name.to_string(),
            source,
        })
    }

    /// The layout file path for `name` inside `dir`.
    pub fn path_in(dir: impl AsRef<Path>, name: &str) -> PathBuf {
        dir.as_ref().join(format!("{name}{THEME_EXTENSION}"))
    }

    /// The theme name this layout was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw layout source.
    pub fn source(&self) -> &str {
        &self.source
    }
}
