#[derive(Debug)]
/// Represents all errors that can occur while evaluating constant
/// expressions.
pub enum EvalError {
    /// The expression names an operator that does not exist.
    UnknownOperator {
        /// The operator token encountered.
        operator: String,
    },
    /// An operand is neither a numeric literal nor a known constant.
    UnresolvedOperand {
        /// The operand token encountered.
        token: String,
    },
    /// The operator requires an operand position that was not supplied.
    MissingOperand {
        /// The operator that is missing an operand.
        operator: String,
    },
    /// The expression contains no tokens at all.
    EmptyExpression,
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted to take the square root of a negative value.
    SqrtOfNegative {
        /// The offending operand.
        operand: f64,
    },
    /// Integer arithmetic overflowed.
    Overflow,
    /// An integer was too large to promote to floating point exactly.
    PrecisionLoss {
        /// The integer that cannot be represented as `f64`.
        value: i64,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { operator } => {
                write!(f, "Error: Unknown operator '{operator}'.")
            },

            Self::UnresolvedOperand { token } => write!(f,
                                                        "Error: Operand '{token}' is neither a number nor a known constant."),

            Self::MissingOperand { operator } => {
                write!(f, "Error: Operator '{operator}' is missing an operand.")
            },

            Self::EmptyExpression => write!(f, "Error: Constant expression is empty."),

            Self::DivisionByZero => write!(f, "Error: Division by zero."),

            Self::SqrtOfNegative { operand } => {
                write!(f, "Error: Square root of negative value {operand}.")
            },

            Self::Overflow => write!(f,
                                     "Error: Integer overflow while trying to compute result."),

            Self::PrecisionLoss { value } => write!(f,
                                                    "Error: Integer {value} cannot be promoted to floating point without loss."),
        }
    }
}

impl std::error::Error for EvalError {}
