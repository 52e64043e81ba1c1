#[derive(Debug)]
/// Represents all errors that can occur while rendering a value tree.
pub enum RenderError {
    /// A mapping key does not fit the target dialect's name syntax.
    InvalidKeyName {
        /// The offending key.
        key: String,
    },
    /// The value has a type the target dialect cannot express.
    UnsupportedType {
        /// The name of the unsupported type.
        type_name: &'static str,
    },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKeyName { key } => write!(f,
                                                   "Error: Key '{key}' is not a valid name. Names start with a letter followed by letters or digits."),

            Self::UnsupportedType { type_name } => {
                write!(f, "Error: Unsupported data type '{type_name}'.")
            },
        }
    }
}

impl std::error::Error for RenderError {}
