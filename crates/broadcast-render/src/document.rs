//! The broadcast document model.
//!
//! A [`Document`] is the deserialized form of a `broadcast.yaml` source
//! file: version tag, theme name, titles, a header and footer, and an
//! ordered list of [`Topic`] entries. Loading is all-or-nothing: a file
//! that is unreadable or structurally short of the expected shape is an
//! error, never a partially populated model.
//!
//! Fields carrying inline markup are wrapped in [`Markup`]. Only `Markup`
//! values can be converted into non-escaped template values, so the
//! trusted-HTML capability is visible in the type system instead of being a
//! flag threaded through the template layer.

use std::fs;
use std::path::Path;

use broadcast_markup::Transformer;
use minijinja::Value;
use serde::Deserialize;

use crate::error::RenderError;

/// File name of the source document inside a broadcast directory.
pub const SOURCE_FILE: &str = "broadcast.yaml";

/// A markup-enabled text field.
///
/// Deserializes transparently from a plain string. After
/// [`Document::transform`] has run, the wrapped text is trusted HTML and is
/// emitted verbatim by the template layer; every other string field stays
/// subject to HTML escaping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Creates a markup field from raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The current text of the field.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rewrites the field in place through the markup engine.
    pub fn apply(&mut self, transformer: &Transformer) {
        self.0 = transformer.transform(&self.0);
    }

    /// Converts the field into a template value exempt from auto-escaping.
    ///
    /// This is the only path from document data to unescaped output.
    pub(crate) fn to_value(&self) -> Value {
        Value::from_safe_string(self.0.clone())
    }
}

/// Header block of a broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    /// Headline text; markup-enabled.
    pub headline: Markup,
}

/// Footer block of a broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    /// Signature text; markup-enabled.
    pub signature: Markup,
}

/// One content entry inside a broadcast, similar to a short article.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    /// Plain-text heading; escaped at render time, never transformed.
    pub heading: String,
    /// Body text; markup-enabled.
    pub content: Markup,
}

/// The parsed source entity describing one broadcast.
///
/// Owned by the pipeline for the duration of one conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub version: String,
    /// Theme name; resolved against the theme directory at render time.
    pub theme: String,
    pub title: String,
    pub subtitle: String,
    pub header: Header,
    pub footer: Footer,
    /// Topics in authoring order.
    pub topics: Vec<Topic>,
}

impl Document {
    /// Reads and parses `broadcast.yaml` from the given source directory.
    ///
    /// # Errors
    ///
    /// [`RenderError::Source`] if the file cannot be read,
    /// [`RenderError::Parse`] if it is not a structurally valid broadcast
    /// (including any missing field).
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = dir.as_ref().join(SOURCE_FILE);
        let raw = fs::read_to_string(&path).map_err(|source| RenderError::Source {
            path: path.clone(),
            source,
        })?;
        let document = serde_yaml::from_str(&raw)?;
        Ok(document)
    }

    /// Runs the markup engine over the markup-enabled fields, in place:
    /// the header headline, the footer signature, and each topic's content.
    ///
    /// Headings and titles are deliberately left untouched.
    pub fn transform(&mut self, transformer: &Transformer) {
        self.header.headline.apply(transformer);
        self.footer.signature.apply(transformer);

        for topic in &mut self.topics {
            topic.content.apply(transformer);
        }
    }
}
