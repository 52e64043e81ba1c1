use crate::{
    converter::value::{Mapping, Number, Value},
    error::RenderError,
};

/// Renders a value tree as dialect text.
///
/// Mappings become `([ ... ])` blocks with one `key : value` line per entry
/// and two spaces of indentation per nesting level. Sequences become
/// `[a, b, c]` on a single line. Strings are wrapped in single quotes
/// verbatim, with no escaping of embedded quotes. Numbers use their
/// canonical decimal form, floats keeping a fractional marker. Entries keep
/// document order.
///
/// # Parameters
/// - `value`: The tree to render, usually the document's root mapping.
///
/// # Returns
/// The rendered text, without a trailing line break.
///
/// # Errors
/// Returns a `RenderError` if a key is not a valid dialect name or a value
/// has a type the dialect cannot express (booleans and date-times).
///
/// # Example
/// ```
/// use tomcast::converter::{
///     renderer::render,
///     value::{Mapping, Value},
/// };
///
/// let mut root = Mapping::new();
/// root.insert("port".to_string(), Value::Integer(8080));
///
/// assert_eq!(render(&Value::Mapping(root)).unwrap(), "([\n  port : 8080\n])");
///
/// assert!(render(&Value::Boolean(true)).is_err());
/// ```
pub fn render(value: &Value) -> Result<String, RenderError> {
    render_value(value, 0)
}

/// Checks that a key fits the dialect's name syntax: an ASCII letter
/// followed by ASCII letters or digits. Underscores are not names.
///
/// # Errors
/// Returns `RenderError::InvalidKeyName` for keys that do not fit.
///
/// # Example
/// ```
/// use tomcast::converter::renderer::validate_key;
///
/// assert!(validate_key("server1").is_ok());
/// assert!(validate_key("1server").is_err());
/// assert!(validate_key("server_name").is_err());
/// assert!(validate_key("").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<(), RenderError> {
    let mut chars = key.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric());

    if valid {
        Ok(())
    } else {
        Err(RenderError::InvalidKeyName { key: key.to_string() })
    }
}

fn render_value(value: &Value, depth: usize) -> Result<String, RenderError> {
    match value {
        Value::Mapping(entries) => render_mapping(entries, depth),
        Value::Sequence(elements) => {
            let rendered = elements.iter()
                                   .map(|element| render_value(element, depth))
                                   .collect::<Result<Vec<_>, _>>()?;

            Ok(format!("[{}]", rendered.join(", ")))
        },
        Value::Str(text) => Ok(format!("'{text}'")),
        Value::Integer(n) => Ok(n.to_string()),
        // Floats go through Number so the canonical form lives in one place.
        Value::Float(x) => Ok(Number::Float(*x).to_string()),
        Value::Boolean(_) | Value::Datetime(_) => {
            Err(RenderError::UnsupportedType { type_name: value.type_name() })
        },
    }
}

/// Renders one mapping level. The entry lines sit one level deeper than the
/// brackets that enclose them.
fn render_mapping(entries: &Mapping, depth: usize) -> Result<String, RenderError> {
    if entries.is_empty() {
        return Ok(format!("([\n{}])", indent(depth)));
    }

    let mut lines = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        validate_key(key)?;
        lines.push(format!("{}{key} : {}",
                           indent(depth + 1),
                           render_value(value, depth + 1)?));
    }

    Ok(format!("([\n{}\n{}])", lines.join(",\n"), indent(depth)))
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
