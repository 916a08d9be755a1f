//! Console adapter for the non-served chat mode

use std::io::Write;

use async_trait::async_trait;

use crate::domain::traits::{Listener, Speaker};

/// Terminal stand-in for voice I/O: reads lines from stdin and prints
/// replies to stdout.
pub struct ConsoleAdapter {
    prompt: String,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            prompt: "You: ".to_string(),
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Speaker for ConsoleAdapter {
    async fn speak(&self, text: &str) {
        println!("Assistant: {}", text);
    }
}

#[async_trait]
impl Listener for ConsoleAdapter {
    async fn listen(&self) -> Option<String> {
        let prompt = self.prompt.clone();
        let line = tokio::task::spawn_blocking(move || {
            print!("{}", prompt);
            let _ = std::io::stdout().flush();
            let mut input = String::new();
            match std::io::stdin().read_line(&mut input) {
                Ok(0) => None,
                Ok(_) => Some(input),
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    None
                }
            }
        })
        .await
        .ok()
        .flatten()?;

        Some(line.trim().to_string())
    }
}
