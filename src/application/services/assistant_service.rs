use std::sync::Arc;

use crate::application::interpreter::MathInterpreter;
use crate::application::prompts::assistant_prompt;
use crate::application::services::intent_service::{Intent, IntentClassifier};
use crate::domain::entities::Command;
use crate::domain::traits::{Clock, Listener, RandomPicker, ReplyPicker, Speaker, SystemClock};
use crate::infrastructure::llm::{GenerationOptions, Generator};

pub const NO_INPUT: &str = "No input provided.";
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that.";

/// Answers free-text messages: canned replies, clock queries, arithmetic,
/// or a delegated generation call.
pub struct AssistantService {
    classifier: IntentClassifier,
    interpreter: MathInterpreter,
    generator: Arc<dyn Generator>,
    picker: Arc<dyn ReplyPicker>,
    clock: Arc<dyn Clock>,
    chat_options: GenerationOptions,
}

impl AssistantService {
    pub fn new(classifier: IntentClassifier, generator: Arc<dyn Generator>) -> Self {
        Self {
            classifier,
            interpreter: MathInterpreter::new(),
            generator,
            picker: Arc::new(RandomPicker),
            clock: Arc::new(SystemClock),
            chat_options: GenerationOptions::conversation(),
        }
    }

    pub fn with_picker(mut self, picker: Arc<dyn ReplyPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_chat_options(mut self, options: GenerationOptions) -> Self {
        self.chat_options = options;
        self
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Produce a reply for one message. Always returns text.
    pub async fn respond(&self, message: &str, lang: &str) -> String {
        let command = Command::new(message);

        match self.classifier.classify(&command) {
            Intent::Empty => NO_INPUT.to_string(),
            Intent::Canned { trigger } => self
                .picker
                .pick(self.classifier.replies(&trigger))
                .unwrap_or(FALLBACK_REPLY)
                .to_string(),
            Intent::Time => self.clock.now().format("It's %I:%M %p").to_string(),
            Intent::Date => self.clock.now().format("Today is %A, %B %d, %Y").to_string(),
            Intent::Math => self.interpreter.interpret(command.text()),
            Intent::Delegate => self.delegate(&command, lang).await,
        }
    }

    async fn delegate(&self, command: &Command, lang: &str) -> String {
        let prompt = assistant_prompt(command.trimmed(), lang);
        match self.generator.generate(&prompt, Some(&self.chat_options)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    provider = self.generator.name(),
                    kind = e.kind(),
                    "generation failed: {}",
                    e
                );
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Listen/respond/speak loop. Ends when the listener is exhausted or
    /// the user types `exit` or `quit`.
    pub async fn converse<V>(&self, voice: &V, lang: &str)
    where
        V: Speaker + Listener,
    {
        while let Some(input) = voice.listen().await {
            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
                break;
            }
            let reply = self.respond(input, lang).await;
            voice.speak(&reply).await;
        }
    }
}
