use indexmap::IndexMap;

use crate::{error::EvalError, util::num::i64_to_f64_checked};

/// An insertion-ordered table of configuration keys and values.
///
/// Document order is significant: the renderer writes entries in exactly the
/// order they appeared in the source, and the constant resolver walks them in
/// that same order.
pub type Mapping = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
/// Represents every value a configuration document can hold.
pub enum Value {
    /// A nested table of key/value pairs, in document order.
    Mapping(Mapping),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// A text value.
    Str(String),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean. Loadable, but the target dialect cannot express it.
    Boolean(bool),
    /// A date-time, kept in its textual form. Loadable, but the target
    /// dialect cannot express it.
    Datetime(String),
}

impl Value {
    /// Returns a short name describing the variant, for diagnostics.
    ///
    /// # Example
    /// ```
    /// use tomcast::converter::value::Value;
    ///
    /// assert_eq!(Value::Boolean(true).type_name(), "boolean");
    /// assert_eq!(Value::Sequence(Vec::new()).type_name(), "sequence");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::Str(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Datetime(_) => "date-time",
        }
    }

    /// Returns the numeric content of the value, if it has any.
    ///
    /// Only integer and float values are numeric; everything else yields
    /// `None`.
    ///
    /// # Example
    /// ```
    /// use tomcast::converter::value::{Number, Value};
    ///
    /// assert_eq!(Value::Integer(3).as_number(), Some(Number::Int(3)));
    /// assert_eq!(Value::Str("3".to_string()).as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(n) => Some(Number::Int(*n)),
            Self::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(n) => Self::Integer(n),
            Number::Float(x) => Self::Float(x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A scalar produced by expression evaluation.
///
/// Arithmetic stays integral as long as every operand is an integer and the
/// operation can be exact; otherwise the result is promoted to floating
/// point. Division and square roots always produce floats.
pub enum Number {
    /// An exact integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
}

impl Number {
    /// Adds two numbers.
    ///
    /// # Errors
    /// Returns `EvalError::Overflow` if integer addition overflows, or
    /// `EvalError::PrecisionLoss` if an integer operand cannot be promoted
    /// exactly.
    ///
    /// # Example
    /// ```
    /// use tomcast::converter::value::Number;
    ///
    /// assert_eq!(Number::Int(2).add(Number::Int(3)).unwrap(), Number::Int(5));
    /// assert_eq!(Number::Int(2).add(Number::Float(0.5)).unwrap(),
    ///            Number::Float(2.5));
    /// ```
    pub fn add(self, other: Self) -> Result<Self, EvalError> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_add(b).map(Self::Int).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Float(self.as_f64()? + other.as_f64()?)),
        }
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    /// Returns `EvalError::Overflow` if integer subtraction overflows, or
    /// `EvalError::PrecisionLoss` if an integer operand cannot be promoted
    /// exactly.
    pub fn sub(self, other: Self) -> Result<Self, EvalError> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_sub(b).map(Self::Int).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Float(self.as_f64()? - other.as_f64()?)),
        }
    }

    /// Multiplies two numbers.
    ///
    /// # Errors
    /// Returns `EvalError::Overflow` if integer multiplication overflows, or
    /// `EvalError::PrecisionLoss` if an integer operand cannot be promoted
    /// exactly.
    pub fn mul(self, other: Self) -> Result<Self, EvalError> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_mul(b).map(Self::Int).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Float(self.as_f64()? * other.as_f64()?)),
        }
    }

    /// Divides `self` by `other`. The result is always floating point.
    ///
    /// # Errors
    /// Returns `EvalError::DivisionByZero` if `other` is zero, or
    /// `EvalError::PrecisionLoss` if an operand cannot be promoted exactly.
    ///
    /// # Example
    /// ```
    /// use tomcast::converter::value::Number;
    ///
    /// assert_eq!(Number::Int(8).div(Number::Int(2)).unwrap(),
    ///            Number::Float(4.0));
    /// assert!(Number::Int(1).div(Number::Int(0)).is_err());
    /// ```
    pub fn div(self, other: Self) -> Result<Self, EvalError> {
        let divisor = other.as_f64()?;
        if divisor == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        Ok(Self::Float(self.as_f64()? / divisor))
    }

    /// Computes the non-negative square root. The result is always floating
    /// point.
    ///
    /// # Errors
    /// Returns `EvalError::SqrtOfNegative` for negative operands, or
    /// `EvalError::PrecisionLoss` if an integer operand cannot be promoted
    /// exactly.
    ///
    /// # Example
    /// ```
    /// use tomcast::converter::value::Number;
    ///
    /// assert_eq!(Number::Int(16).sqrt().unwrap(), Number::Float(4.0));
    /// assert!(Number::Int(-1).sqrt().is_err());
    /// ```
    pub fn sqrt(self) -> Result<Self, EvalError> {
        let operand = self.as_f64()?;
        if operand < 0.0 {
            return Err(EvalError::SqrtOfNegative { operand });
        }

        Ok(Self::Float(operand.sqrt()))
    }

    /// Promotes the number to `f64`, refusing integers that `f64` cannot
    /// represent exactly.
    ///
    /// # Errors
    /// Returns `EvalError::PrecisionLoss` if the integer exceeds `2^53 - 1`
    /// in absolute value.
    pub fn as_f64(self) -> Result<f64, EvalError> {
        match self {
            Self::Int(n) => i64_to_f64_checked(n, EvalError::PrecisionLoss { value: n }),
            Self::Float(x) => Ok(x),
        }
    }
}

impl std::fmt::Display for Number {
    /// Writes the canonical decimal form. Integral floats keep their
    /// fractional marker, so `Float(4.0)` is `4.0`, never `4`.
    ///
    /// # Example
    /// ```
    /// use tomcast::converter::value::Number;
    ///
    /// assert_eq!(Number::Int(42).to_string(), "42");
    /// assert_eq!(Number::Float(4.0).to_string(), "4.0");
    /// assert_eq!(Number::Float(3.14).to_string(), "3.14");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
