//! Math evaluator - Computes a [`MathOperation`] and formats the reply

use crate::application::errors::MathError;
use crate::domain::entities::{BinaryOp, MathOperation};

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";
pub const NOT_UNDERSTOOD: &str = "I couldn't understand the math operation.";
pub const NEGATIVE_FACTORIAL: &str = "Factorial is not defined for negative numbers";
pub const NEGATIVE_SQUARE_ROOT: &str = "Square root is not defined for negative numbers";

/// Largest factorial computed exactly; 20! is the last one that fits in a u64.
const MAX_FACTORIAL: i64 = 20;

pub fn evaluate(operation: &MathOperation) -> Result<String, MathError> {
    match operation {
        MathOperation::CubeRoot(n) => Ok(format!(
            "The cube root of {} is {:.4}",
            format_number(*n),
            n.cbrt()
        )),
        MathOperation::SquareRoot(n) if *n < 0.0 => Ok(NEGATIVE_SQUARE_ROOT.to_string()),
        MathOperation::SquareRoot(n) => Ok(format!(
            "The square root of {} is {:.4}",
            format_number(*n),
            n.sqrt()
        )),
        MathOperation::Factorial(n) => Ok(factorial(*n)),
        MathOperation::Power { base, exponent } => {
            let result = base.powf(*exponent);
            if base.is_finite() && exponent.is_finite() {
                if result.is_nan() || (result.is_infinite() && *base == 0.0) {
                    return Err(MathError::Domain);
                }
                if result.is_infinite() {
                    return Err(MathError::Overflow);
                }
            }
            Ok(format!(
                "{} to the power of {} is {}",
                format_number(*base),
                format_number(*exponent),
                format_number(result)
            ))
        }
        MathOperation::Binary { op, lhs, rhs } => binary(*op, *lhs, *rhs),
        MathOperation::Unrecognized { numbers } if numbers.is_empty() => {
            Ok(NOT_UNDERSTOOD.to_string())
        }
        MathOperation::Unrecognized { numbers } => Ok(format!(
            "I found numbers: {}. Please specify an operation like 'plus', 'minus', 'times', or 'divided by'.",
            numbers.join(", ")
        )),
    }
}

fn factorial(n: i64) -> String {
    if n < 0 {
        return NEGATIVE_FACTORIAL.to_string();
    }
    if n > MAX_FACTORIAL {
        return format!("Factorial of {} is too large to calculate", n);
    }
    let value: u64 = (1..=n as u64).product();
    format!("The factorial of {} is {}", n, value)
}

fn binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<String, MathError> {
    let (a, b) = (format_number(lhs), format_number(rhs));
    match op {
        BinaryOp::Add => Ok(format!("{} plus {} equals {}", a, b, format_number(lhs + rhs))),
        BinaryOp::Subtract => Ok(format!("{} minus {} equals {}", a, b, format_number(lhs - rhs))),
        BinaryOp::Multiply => Ok(format!("{} times {} equals {}", a, b, format_number(lhs * rhs))),
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return Ok(DIVIDE_BY_ZERO.to_string());
            }
            Ok(format!("{} divided by {} equals {:.4}", a, b, lhs / rhs))
        }
        BinaryOp::Modulo => {
            let (x, y) = (lhs.trunc(), rhs.trunc());
            if y == 0.0 {
                return Ok(DIVIDE_BY_ZERO.to_string());
            }
            let remainder = floored_rem(x, y).ok_or(MathError::Overflow)?;
            Ok(format!(
                "The remainder when {} is divided by {} is {}",
                a, b, remainder
            ))
        }
    }
}

/// Remainder of two whole floats with the sign of the divisor. `%` is exact
/// on integer-valued floats, so large operands keep every digit.
fn floored_rem(x: f64, y: f64) -> Option<f64> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let r = x % y;
    let r = if r != 0.0 && (r < 0.0) != (y < 0.0) { r + y } else { r };
    // no negative zero
    Some(if r == 0.0 { 0.0 } else { r })
}

/// Whole floats keep one decimal place (`10.0`) below 1e16 and switch to
/// exponent form (`1e+20`) from there. Fractional values use the shortest
/// round-trip form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value.fract() != 0.0 {
        return format!("{}", value);
    }
    if value.abs() < 1e16 {
        return format!("{:.1}", value);
    }
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}
