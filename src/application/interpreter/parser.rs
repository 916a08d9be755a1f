//! Math parser - Turns a command into a tagged [`MathOperation`]

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::application::errors::MathError;
use crate::domain::entities::{BinaryOp, MathOperation};

static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("decimal pattern is valid"));

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").expect("integer pattern is valid"));

const ROOT_KEYWORDS: &[&str] = &["square root", "root"];
const POWER_KEYWORDS: &[&str] = &["power", "raised to", "to the power"];

/// Ordered-rule math parser.
///
/// Rules are tried in a fixed order: cube root, square root, factorial,
/// power, binary arithmetic. A rule whose keyword is present but whose
/// operands are missing falls through to the next one. When nothing
/// matches the result is [`MathOperation::Unrecognized`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MathParser;

impl MathParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an already lowercased command.
    pub fn parse(&self, text: &str) -> Result<MathOperation, MathError> {
        let numbers = self.numbers(text);

        if text.contains("cube root") {
            if let Some(first) = numbers.first() {
                return Ok(MathOperation::CubeRoot(parse_f64(first)?));
            }
        }

        if ROOT_KEYWORDS.iter().any(|k| text.contains(k)) {
            if let Some(first) = numbers.first() {
                return Ok(MathOperation::SquareRoot(parse_f64(first)?));
            }
        }

        if text.contains("factorial") {
            if let Some(first) = self.integers(text).first() {
                let n = first
                    .parse::<i64>()
                    .map_err(|_| MathError::InvalidNumber(first.to_string()))?;
                return Ok(MathOperation::Factorial(n));
            }
        }

        if POWER_KEYWORDS.iter().any(|k| text.contains(k)) && numbers.len() >= 2 {
            return Ok(MathOperation::Power {
                base: parse_f64(numbers[0])?,
                exponent: parse_f64(numbers[1])?,
            });
        }

        if numbers.len() >= 2 {
            if let Some(op) = BinaryOp::resolve(text) {
                return Ok(MathOperation::Binary {
                    op,
                    lhs: parse_f64(numbers[0])?,
                    rhs: parse_f64(numbers[1])?,
                });
            }
        }

        Ok(MathOperation::Unrecognized {
            numbers: numbers.into_iter().map(str::to_string).collect(),
        })
    }

    /// Decimal numbers in order of appearance.
    pub fn numbers<'a>(&self, text: &'a str) -> Vec<&'a str> {
        extract(&DECIMAL, text)
    }

    /// Integers in order of appearance. `5.5` yields `5` and `5`.
    pub fn integers<'a>(&self, text: &'a str) -> Vec<&'a str> {
        extract(&INTEGER, text)
    }
}

/// A leading `-` is a sign only when it does not directly follow a digit
/// or letter, so `10-3` reads as `10` and `3`.
fn extract<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    pattern
        .find_iter(text)
        .map(|m| {
            let token = m.as_str();
            let glued = text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '.');
            if token.starts_with('-') && glued {
                &token[1..]
            } else {
                token
            }
        })
        .collect()
}

fn parse_f64(token: &str) -> Result<f64, MathError> {
    token
        .parse::<f64>()
        .map_err(|_| MathError::InvalidNumber(token.to_string()))
}
