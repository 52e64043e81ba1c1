use crate::error::{EvalError, ParseError, RenderError};

#[derive(Debug)]
/// Unifies every error the conversion pipeline can produce.
///
/// Each variant wraps the error of one pipeline stage, so callers that only
/// want a diagnostic can print the error directly, while callers that care
/// about the stage can match on it.
pub enum ConvertError {
    /// The source document is not valid markup.
    Parse(ParseError),
    /// A constant expression failed to evaluate.
    Eval(EvalError),
    /// The value tree cannot be expressed in the target dialect.
    Render(RenderError),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
            Self::Render(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<ParseError> for ConvertError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for ConvertError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl From<RenderError> for ConvertError {
    fn from(error: RenderError) -> Self {
        Self::Render(error)
    }
}
