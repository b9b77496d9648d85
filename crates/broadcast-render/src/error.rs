//! Error type for document loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all loading and rendering operations.
///
/// Every variant is fatal to the conversion it occurred in: there is no
/// partial or degraded output. The caller decides whether to terminate the
/// process; this crate only returns values.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The source document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source document is not a structurally valid broadcast.
    #[error("malformed broadcast document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// No layout file exists for the requested theme name.
    #[error("theme not found: {name} (expected {})", .path.display())]
    ThemeNotFound { name: String, path: PathBuf },

    /// The theme's layout file exists but could not be read.
    #[error("failed to read theme {}: {source}", .path.display())]
    ThemeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_not_found_display() {
        let err = RenderError::ThemeNotFound {
            name: "simple".to_string(),
            path: PathBuf::from("themes/simple.tmpl.html"),
        };
        let msg = err.to_string();
        assert!(msg.contains("simple"));
        assert!(msg.contains("themes/simple.tmpl.html"));
    }

    #[test]
    fn test_source_error_keeps_cause() {
        use std::error::Error as _;

        let err = RenderError::Source {
            path: PathBuf::from("x/broadcast.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("x/broadcast.yaml"));
    }
}
