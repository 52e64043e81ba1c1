#[derive(Debug)]
/// Represents a malformed source document.
///
/// Produced when the structured-data parser rejects the cleaned input. The
/// message comes from the parser; the line number is derived from the span
/// the parser reported, when it reported one.
pub struct ParseError {
    /// The 1-based source line where the problem starts, when known.
    pub line:    Option<usize>,
    /// The parser's description of the problem.
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Error on line {line}: {}", self.message),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}
