//! The `broadcast` command-line tool.
//!
//! Thin binary over [`broadcast_render`]: command dispatch, output-file
//! writing, and user-facing diagnostics live here; everything with actual
//! conversion logic lives in the library crates.

pub mod cli;
