use indexmap::IndexMap;

use crate::{
    converter::{
        evaluator::evaluate,
        value::{Mapping, Number, Value},
    },
    error::EvalError,
};

#[derive(Debug, Default)]
/// A table of named constants built while walking the top level of a
/// document.
///
/// The table is a side channel: expressions read it to resolve identifiers,
/// but the value tree handed to the renderer is never rewritten from it.
/// Entries keep their insertion order; inserting an existing name replaces
/// its value.
pub struct ConstantsTable {
    entries: IndexMap<String, Value>,
}

impl ConstantsTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Stores a value under a name, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    /// Returns the value stored under a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns the numeric content of the value stored under a name.
    ///
    /// Identifiers in expressions can only stand for numbers, so lookups of
    /// string, mapping, or other non-numeric entries yield `None`.
    ///
    /// # Example
    /// ```
    /// use tomcast::converter::{
    ///     constants::ConstantsTable,
    ///     value::{Number, Value},
    /// };
    ///
    /// let mut table = ConstantsTable::new();
    /// table.insert("pi", Value::Float(3.14));
    /// table.insert("name", Value::Str("gateway".to_string()));
    ///
    /// assert_eq!(table.number("pi"), Some(Number::Float(3.14)));
    /// assert_eq!(table.number("name"), None);
    /// assert_eq!(table.number("missing"), None);
    /// ```
    #[must_use]
    pub fn number(&self, name: &str) -> Option<Number> {
        self.entries.get(name).and_then(Value::as_number)
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reports whether a string value is a constant expression rather than a
/// plain literal.
///
/// # Example
/// ```
/// use tomcast::converter::constants::is_constant_expression;
///
/// assert!(is_constant_expression("!{* pi 2}"));
/// assert!(!is_constant_expression("plain text"));
/// assert!(!is_constant_expression("!{unclosed"));
/// ```
#[must_use]
pub fn is_constant_expression(text: &str) -> bool {
    text.starts_with("!{") && text.ends_with('}')
}

/// Walks the top level of a document and builds its constants table.
///
/// Entries are visited in document order. A string value shaped `!{...}` is
/// evaluated as a prefix expression against the table built so far, so a
/// constant can reference every constant declared above it. Every other
/// value is stored as-is; only the numeric ones can later be referenced from
/// expressions.
///
/// Resolution never touches the tree itself: a constant-expression string
/// still renders as its original literal.
///
/// # Parameters
/// - `root`: The document's top-level mapping.
///
/// # Returns
/// The fully built constants table.
///
/// # Errors
/// Returns an `EvalError` if any constant expression fails to evaluate.
///
/// # Example
/// ```
/// use tomcast::converter::{constants::resolve_constants, loader::load, value::Value};
///
/// let root = load("pi = 3.14\ntau = \"!{* pi 2}\"").unwrap();
/// let table = resolve_constants(&root).unwrap();
///
/// assert_eq!(table.get("pi"), Some(&Value::Float(3.14)));
/// assert!(matches!(table.get("tau"),
///                  Some(Value::Float(x)) if (x - 6.28).abs() < 0.01));
/// ```
pub fn resolve_constants(root: &Mapping) -> Result<ConstantsTable, EvalError> {
    let mut constants = ConstantsTable::new();

    for (name, value) in root {
        if let Value::Str(text) = value
           && is_constant_expression(text)
        {
            let number = evaluate(text, &constants)?;
            constants.insert(name.clone(), Value::from(number));
        } else {
            constants.insert(name.clone(), value.clone());
        }
    }

    Ok(constants)
}
