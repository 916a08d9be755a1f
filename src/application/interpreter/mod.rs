//! Arithmetic interpreter - answers math commands with a reply string

pub mod evaluator;
pub mod parser;

pub use evaluator::{evaluate, format_number};
pub use parser::MathParser;

/// Parses and evaluates math commands. Never fails: every error becomes
/// a `Math error: ...` reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathInterpreter {
    parser: MathParser,
}

impl MathInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interpret(&self, command: &str) -> String {
        let text = command.to_lowercase();
        let text = text.trim();
        match self.parser.parse(text).and_then(|op| evaluate(&op)) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!("math command '{}' failed: {}", text, e);
                format!("Math error: {}", e)
            }
        }
    }
}

pub fn interpret_math(command: &str) -> String {
    MathInterpreter::new().interpret(command)
}
