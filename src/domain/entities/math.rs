/// Two-operand arithmetic operations, in keyword precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    /// Resolution order when a command mentions several operations.
    pub const PRECEDENCE: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulo,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            BinaryOp::Add => &["plus", "add"],
            BinaryOp::Subtract => &["minus", "subtract"],
            BinaryOp::Multiply => &["times", "multiply"],
            BinaryOp::Divide => &["divided by", "divide"],
            BinaryOp::Modulo => &["mod", "modulo"],
        }
    }

    /// First operation (by precedence) whose keyword appears in `text`.
    pub fn resolve(text: &str) -> Option<BinaryOp> {
        Self::PRECEDENCE
            .into_iter()
            .find(|op| op.keywords().iter().any(|k| text.contains(k)))
    }
}

/// A parsed math request: what to compute and with which operands.
#[derive(Debug, Clone, PartialEq)]
pub enum MathOperation {
    CubeRoot(f64),
    SquareRoot(f64),
    Factorial(i64),
    Power { base: f64, exponent: f64 },
    Binary { op: BinaryOp, lhs: f64, rhs: f64 },
    /// No operation matched; carries any numbers seen, as written.
    Unrecognized { numbers: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_follows_precedence() {
        assert_eq!(BinaryOp::resolve("add 2 and subtract 3"), Some(BinaryOp::Add));
        assert_eq!(BinaryOp::resolve("10 divided by 2"), Some(BinaryOp::Divide));
        assert_eq!(BinaryOp::resolve("10 modulo 3"), Some(BinaryOp::Modulo));
        assert_eq!(BinaryOp::resolve("the square of 3"), None);
    }
}
