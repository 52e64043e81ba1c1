/// Pipeline errors.
///
/// Defines the error type returned by the top-level conversion entry point.
/// It wraps the stage-specific errors so a caller can handle the whole
/// pipeline with one type.
pub mod convert_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while resolving constants and
/// evaluating prefix expressions. Evaluation errors include unknown
/// operators, unresolvable operands, division by zero, and failed numeric
/// promotions.
pub mod eval_error;
/// Parsing errors.
///
/// Defines the error type produced when the source document is not valid
/// markup. Parse errors carry the parser's message and, when available, the
/// source line where the problem starts.
pub mod parse_error;
/// Rendering errors.
///
/// Contains all error types that can be raised while writing a value tree in
/// the target dialect. Rendering errors include invalid key names and value
/// types the dialect cannot express.
pub mod render_error;

pub use convert_error::ConvertError;
pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use render_error::RenderError;
