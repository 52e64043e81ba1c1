use crate::{
    converter::{constants::ConstantsTable, value::Number},
    error::EvalError,
};

/// Evaluates a prefix-notation constant expression.
///
/// The expression is the raw string value, marker included: one layer of the
/// `!{` prefix and `}` suffix is trimmed (each only if present), and the
/// remainder is split on whitespace. The first token is the operator; every
/// following token is an operand, resolved eagerly from left to right as a
/// named constant, then as an integer literal, then as a float literal.
///
/// Supported operators:
///
/// - `+` and `*` take one or more operands and fold them all.
/// - `-` and `/` read exactly their first two operands; extras are ignored.
/// - `sqrt` reads exactly its first operand; extras are ignored.
/// - `print` writes all operands to standard output, space separated and
///   newline terminated, and returns the first one.
///
/// # Parameters
/// - `expression`: The expression text, e.g. `"!{* pi 2}"`.
/// - `constants`: Named constants visible to the expression.
///
/// # Returns
/// The computed number.
///
/// # Errors
/// Returns an `EvalError` for unknown operators, unresolvable or missing
/// operands, empty expressions, and arithmetic failures such as division by
/// zero.
///
/// # Example
/// ```
/// use tomcast::converter::{
///     constants::ConstantsTable,
///     evaluator::evaluate,
///     value::{Number, Value},
/// };
///
/// let mut constants = ConstantsTable::new();
/// constants.insert("pi", Value::Float(3.14));
///
/// let tau = evaluate("!{* pi 2}", &constants).unwrap();
/// assert!(matches!(tau, Number::Float(x) if (x - 6.28).abs() < 0.01));
///
/// let root = evaluate("!{sqrt 16}", &ConstantsTable::new()).unwrap();
/// assert_eq!(root, Number::Float(4.0));
///
/// assert!(evaluate("!{/ 1 0}", &ConstantsTable::new()).is_err());
/// ```
pub fn evaluate(expression: &str, constants: &ConstantsTable) -> Result<Number, EvalError> {
    let inner = expression.trim();
    let inner = inner.strip_prefix("!{").unwrap_or(inner);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    let mut tokens = inner.split_whitespace();
    let Some(operator) = tokens.next() else {
        return Err(EvalError::EmptyExpression);
    };

    let operands = tokens.map(|token| resolve_operand(token, constants))
                         .collect::<Result<Vec<_>, _>>()?;

    apply(operator, &operands)
}

/// Resolves one operand token. Named constants shadow numeric literals.
fn resolve_operand(token: &str, constants: &ConstantsTable) -> Result<Number, EvalError> {
    if let Some(number) = constants.number(token) {
        return Ok(number);
    }
    if let Ok(n) = token.parse::<i64>() {
        return Ok(Number::Int(n));
    }
    if let Ok(x) = token.parse::<f64>() {
        return Ok(Number::Float(x));
    }

    Err(EvalError::UnresolvedOperand { token: token.to_string() })
}

fn apply(operator: &str, operands: &[Number]) -> Result<Number, EvalError> {
    match operator {
        "+" => fold_operands(operator, operands, Number::add),
        "*" => fold_operands(operator, operands, Number::mul),
        "-" => operand_at(operator, operands, 0)?.sub(operand_at(operator, operands, 1)?),
        "/" => operand_at(operator, operands, 0)?.div(operand_at(operator, operands, 1)?),
        "sqrt" => operand_at(operator, operands, 0)?.sqrt(),
        "print" => print(operator, operands),
        _ => Err(EvalError::UnknownOperator { operator: operator.to_string() }),
    }
}

/// Returns the operand at a position, or reports it missing. Positions past
/// the ones an operator reads are never checked, so extra operands pass
/// silently.
fn operand_at(operator: &str, operands: &[Number], position: usize) -> Result<Number, EvalError> {
    operands.get(position).copied().ok_or_else(|| missing(operator))
}

/// Folds all operands with a binary operation, left to right.
fn fold_operands(operator: &str,
                 operands: &[Number],
                 combine: fn(Number, Number) -> Result<Number, EvalError>)
                 -> Result<Number, EvalError> {
    let (first, rest) = operands.split_first().ok_or_else(|| missing(operator))?;

    rest.iter().try_fold(*first, |acc, operand| combine(acc, *operand))
}

/// Writes all operands to standard output and returns the first one.
fn print(operator: &str, operands: &[Number]) -> Result<Number, EvalError> {
    let result = operand_at(operator, operands, 0)?;

    let rendered = operands.iter()
                           .map(Number::to_string)
                           .collect::<Vec<_>>()
                           .join(" ");
    println!("{rendered}");

    Ok(result)
}

fn missing(operator: &str) -> EvalError {
    EvalError::MissingOperand { operator: operator.to_string() }
}
