//! # tomcast
//!
//! tomcast is a configuration converter written in Rust.
//! It reads TOML documents, strips two extra comment syntaxes, resolves
//! named constants written in prefix notation, and renders the result in a
//! bracketed configuration dialect.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    converter::{comments::strip_comments, constants::resolve_constants, loader::load,
                renderer::render, value::Value},
    error::ConvertError,
};

/// Orchestrates the entire conversion pipeline.
///
/// This module ties together comment stripping, document loading, constant
/// resolution, expression evaluation, and rendering. Each stage lives in its
/// own submodule and is usable on its own; the crate root composes them into
/// the full source-to-dialect conversion.
///
/// # Responsibilities
/// - Declares the pipeline stages: comments, loader, constants, evaluator,
///   renderer.
/// - Defines the shared value and number types.
/// - Manages the flow of data and errors between stages.
pub mod converter;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while parsing,
/// resolving constants, or rendering. It standardizes error reporting and
/// carries detailed information about failures, including source lines where
/// available.
///
/// # Responsibilities
/// - Defines error types for all failure modes (parser, evaluator, renderer).
/// - Attaches messages and context for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers used by the evaluator, such as safe
/// promotion from integer to floating-point values without silent data loss.
///
/// # Responsibilities
/// - Safely convert `i64` to `f64` without silent precision loss.
pub mod util;

/// Converts a complete source document into dialect text.
///
/// The pipeline runs in four stages: dialect comments are stripped, the
/// remaining text is parsed into a value tree, top-level constants are
/// resolved in document order, and the tree is rendered. Constant resolution
/// affects diagnostics and `print` output only; the rendered text always
/// shows the document's original literals.
///
/// The returned text has no trailing line break.
///
/// # Errors
/// Returns an error if the document is malformed, a constant expression
/// fails to evaluate, or the tree contains keys or types the dialect cannot
/// express.
///
/// # Examples
/// ```
/// use tomcast::convert;
///
/// let source = "[database]\nserver = '192.168.1.1'\nports = [8000, 8001, 8002]\n";
/// let rendered = convert(source).unwrap();
///
/// assert_eq!(rendered,
///            "([\n  database : ([\n    server : '192.168.1.1',\n    \
///             ports : [8000, 8001, 8002]\n  ])\n])");
///
/// // Malformed documents are rejected.
/// assert!(convert("port = ").is_err());
/// ```
pub fn convert(source: &str) -> Result<String, ConvertError> {
    let cleaned = strip_comments(source);
    let root = load(&cleaned)?;

    resolve_constants(&root)?;

    Ok(render(&Value::Mapping(root))?)
}
