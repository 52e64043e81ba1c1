use crate::{
    converter::value::{Mapping, Value},
    error::ParseError,
};

/// Parses a cleaned source document into a value tree.
///
/// The heavy lifting is delegated to the TOML parser; this function only
/// translates its document model into [`Value`], keeping entries in document
/// order.
///
/// # Parameters
/// - `text`: The document text, already stripped of dialect comments.
///
/// # Returns
/// The root mapping of the document.
///
/// # Errors
/// Returns a `ParseError` if the text is not a valid document.
///
/// # Example
/// ```
/// use tomcast::converter::{loader::load, value::Value};
///
/// let root = load("port = 8080").unwrap();
/// assert_eq!(root["port"], Value::Integer(8080));
///
/// assert!(load("port = ").is_err());
/// ```
pub fn load(text: &str) -> Result<Mapping, ParseError> {
    let table = text.parse::<toml::Table>()
                    .map_err(|error| parse_error(text, &error))?;

    Ok(convert_table(table))
}

/// Builds a `ParseError` from the parser's message and span. The span is a
/// byte offset, so the line number is recovered by counting line breaks in
/// front of it.
fn parse_error(text: &str, error: &toml::de::Error) -> ParseError {
    let line = error.span().map(|span| {
                                let start = span.start.min(text.len());
                                text.bytes().take(start).filter(|&b| b == b'\n').count() + 1
                            });

    ParseError { line,
                 message: error.message().to_string() }
}

fn convert_table(table: toml::Table) -> Mapping {
    table.into_iter()
         .map(|(key, value)| (key, convert_value(value)))
         .collect()
}

fn convert_value(value: toml::Value) -> Value {
    match value {
        toml::Value::Table(table) => Value::Mapping(convert_table(table)),
        toml::Value::Array(array) => {
            Value::Sequence(array.into_iter().map(convert_value).collect())
        },
        toml::Value::String(text) => Value::Str(text),
        toml::Value::Integer(n) => Value::Integer(n),
        toml::Value::Float(x) => Value::Float(x),
        toml::Value::Boolean(b) => Value::Boolean(b),
        toml::Value::Datetime(datetime) => Value::Datetime(datetime.to_string()),
    }
}
