//! The conversion pipeline.
//!
//! [`Pipeline`] owns the markup engine and drives one conversion: load the
//! document, rewrite its markup-enabled fields, resolve the theme, render.
//! The result is a single in-memory byte buffer; writing it anywhere is the
//! caller's concern.

use std::path::{Path, PathBuf};

use broadcast_markup::Transformer;
use minijinja::{context, Environment, Value};

use crate::document::Document;
use crate::error::RenderError;
use crate::theme::{Theme, THEME_DIR, THEME_EXTENSION};

/// Drives the document-to-HTML conversion.
///
/// Construct once per process with the engine to use; the pipeline is
/// read-only afterwards and each [`build`](Self::build) call performs one
/// full synchronous conversion.
#[derive(Debug, Clone)]
pub struct Pipeline {
    transformer: Transformer,
    theme_dir: PathBuf,
}

impl Pipeline {
    /// Creates a pipeline resolving themes in the default [`THEME_DIR`]
    /// relative to the process working directory.
    pub fn new(transformer: Transformer) -> Self {
        Self::with_theme_dir(transformer, THEME_DIR)
    }

    /// Creates a pipeline resolving themes in an explicit directory.
    pub fn with_theme_dir(transformer: Transformer, theme_dir: impl Into<PathBuf>) -> Self {
        Self {
            transformer,
            theme_dir: theme_dir.into(),
        }
    }

    /// Converts the broadcast in `source_dir` to an HTML byte buffer.
    ///
    /// Loads `broadcast.yaml`, transforms the markup-enabled fields in
    /// place, resolves the document's theme, and renders. Nothing is
    /// written to storage.
    pub fn build(&self, source_dir: impl AsRef<Path>) -> Result<Vec<u8>, RenderError> {
        let mut document = Document::load(source_dir)?;
        document.transform(&self.transformer);

        let theme = Theme::load_in(&self.theme_dir, &document.theme)?;
        self.render(&document, &theme)
    }

    /// Renders an already-transformed document through a loaded theme.
    pub fn render(&self, document: &Document, theme: &Theme) -> Result<Vec<u8>, RenderError> {
        let mut env = environment();

        // Registering under the full file name keeps the .html suffix, which
        // is what switches minijinja's HTML auto-escaping on.
        let name = format!("{}{}", theme.name(), THEME_EXTENSION);
        env.add_template_owned(name.clone(), theme.source().to_string())?;

        let template = env.get_template(&name)?;
        let html = template.render(template_context(document))?;
        Ok(html.into_bytes())
    }
}

/// Builds the template environment shared by every render.
///
/// Layouts get one helper beyond the minijinja built-ins: `increment`, for
/// 1-based display numbering of zero-based loop indexes.
fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("increment", |n: i64| n + 1);
    env
}

/// Exposes a document to the template.
///
/// Plain string fields go in as ordinary values and are auto-escaped.
/// [`Markup`](crate::document::Markup) fields go in as safe values and are
/// emitted verbatim; this is the only unescaped path.
fn template_context(document: &Document) -> Value {
    let topics: Vec<Value> = document
        .topics
        .iter()
        .map(|topic| {
            context! {
                heading => topic.heading,
                content => topic.content.to_value(),
            }
        })
        .collect();

    context! {
        version => document.version,
        theme => document.theme,
        title => document.title,
        subtitle => document.subtitle,
        header => context! { headline => document.header.headline.to_value() },
        footer => context! { signature => document.footer.signature.to_value() },
        topics => topics,
    }
}
