//! Broadcast document loading, markup transformation, and theme rendering.
//!
//! A broadcast is a short structured document (title, header, footer, and
//! an ordered list of topics) authored as `broadcast.yaml` and rendered to
//! a single HTML page through a named layout template (a "theme").
//!
//! The crate is split along the conversion pipeline:
//!
//! - [`document`]: the deserialized [`Document`] model and the [`Markup`]
//!   wrapper marking the fields that carry inline markup
//! - [`theme`]: resolution of a theme name to its layout file
//! - [`pipeline`]: the [`Pipeline`] tying it together: transform the
//!   markup fields, then render the document through the theme
//!
//! All failures are reported as [`RenderError`] values; nothing in this
//! crate terminates the process.
//!
//! # Example
//!
//! ```rust,ignore
//! use broadcast_markup::Transformer;
//! use broadcast_render::Pipeline;
//!
//! let pipeline = Pipeline::new(Transformer::default());
//! let html = pipeline.build("newsletters/2024-06")?;
//! std::fs::write("newsletters/2024-06/broadcast.html", html)?;
//! ```

pub mod document;
pub mod error;
pub mod pipeline;
pub mod theme;

pub use document::{Document, Footer, Header, Markup, Topic, SOURCE_FILE};
pub use error::RenderError;
pub use pipeline::Pipeline;
pub use theme::{Theme, THEME_DIR, THEME_EXTENSION};
