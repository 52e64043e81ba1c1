/// The comments module strips dialect comments from raw input.
///
/// Comment removal happens before parsing, because the comment syntaxes are
/// not part of the structured-data grammar. The module recognizes line
/// comments introduced by `NB.` and block comments delimited by `/#` and
/// `#/`.
///
/// # Responsibilities
/// - Removes line comments while keeping their line breaks.
/// - Removes block comments, including unterminated ones, non-greedily.
/// - Preserves everything else byte for byte.
pub mod comments;
/// The constants module resolves named constants declared at the top level.
///
/// A top-level string value shaped `!{...}` declares a constant: its
/// expression is evaluated and the result stored in a table under the
/// entry's key. Constants are resolved in document order, so later constants
/// can reference earlier ones.
///
/// # Responsibilities
/// - Detects which top-level entries are constant expressions.
/// - Builds the `ConstantsTable` incrementally, in document order.
/// - Keeps resolution strictly out of the rendered tree.
pub mod constants;
/// The evaluator module computes prefix-notation expressions.
///
/// An expression is a flat sequence of whitespace-separated tokens: an
/// operator followed by operands. Operands are numeric literals or names of
/// previously resolved constants. The evaluator performs the arithmetic and
/// reports every failure as a typed error.
///
/// # Responsibilities
/// - Tokenizes expressions and resolves operands eagerly.
/// - Applies the supported operators with checked arithmetic.
/// - Handles the `print` side effect on standard output.
pub mod evaluator;
/// The loader module parses cleaned text into the value tree.
///
/// Parsing the markup itself is delegated to the TOML parser; the loader
/// translates the parser's document model into this crate's [`Value`] tree
/// and turns parser failures into a `ParseError` with a source line.
///
/// # Responsibilities
/// - Drives the external parser over the cleaned text.
/// - Converts the parsed document into `Value`, keeping document order.
/// - Recovers line numbers from parser spans for diagnostics.
///
/// [`Value`]: value::Value
pub mod loader;
/// The renderer module writes a value tree as dialect text.
///
/// The renderer walks the tree recursively and produces the target dialect's
/// literal syntax: `([ ... ])` blocks for mappings, `[ ... ]` for sequences,
/// single-quoted strings, and canonical decimal numbers.
///
/// # Responsibilities
/// - Renders every supported value type at the correct indentation depth.
/// - Validates key names against the dialect's name syntax.
/// - Rejects value types the dialect cannot express.
pub mod renderer;
/// The value module defines the data types shared across the pipeline.
///
/// This module declares the tree representation of a parsed document and the
/// numeric scalar used by expression evaluation. It also provides the
/// checked arithmetic used by the evaluator, including promotion between
/// integer and floating-point values.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Mapping` alias for ordered tables.
/// - Defines the `Number` scalar with checked, promoting arithmetic.
/// - Provides canonical textual forms for numbers.
pub mod value;
