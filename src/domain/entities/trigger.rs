/// A trigger phrase and the canned replies it can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub phrase: String,
    pub replies: Vec<String>,
}

impl Trigger {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            replies: Vec::new(),
        }
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.replies.push(reply.into());
        self
    }

    pub fn with_replies<I, S>(mut self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replies.extend(replies.into_iter().map(Into::into));
        self
    }

    /// Substring match against already-normalized text.
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.phrase.as_str())
    }
}

/// Ordered trigger table. Lookup walks triggers in registration order and
/// the first phrase contained in the input wins.
#[derive(Debug, Clone, Default)]
pub struct TriggerTable {
    triggers: Vec<Trigger>,
}

impl TriggerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in greeting and travel triggers.
    pub fn with_defaults(assistant_name: &str) -> Self {
        let mut table = Self::new();
        table.register(Trigger::new("hello").with_replies([
            "Hello! How can I help you today?",
            "Hi there!",
            "Hello! Nice to meet you!",
        ]));
        table.register(Trigger::new("how are you").with_replies([
            "I'm doing great, thank you for asking!",
            "I'm fine, how about you?",
        ]));
        table.register(Trigger::new("what is your name").with_replies([
            format!("I'm {}, your personal assistant!", assistant_name),
            format!("You can call me {}.", assistant_name),
        ]));
        table.register(Trigger::new("goodbye").with_replies([
            "Goodbye! Have a great day!",
            "See you later!",
            "Bye! Take care!",
        ]));
        table.register(Trigger::new("thank you").with_replies([
            "You're welcome!",
            "Happy to help!",
            "No problem!",
        ]));
        table.register(Trigger::new("trip").with_replies([
            "Sounds like an exciting trip! Tell me more about your destination.",
            "Planning a trip? What's your dream destination?",
        ]));
        table.register(Trigger::new("plan").with_replies([
            "I'd love to help plan your trip. What's the occasion?",
            "Let's plan an amazing adventure!",
        ]));
        table
    }

    /// Registering an existing phrase replaces its replies in place.
    pub fn register(&mut self, trigger: Trigger) {
        match self.triggers.iter_mut().find(|t| t.phrase == trigger.phrase) {
            Some(existing) => *existing = trigger,
            None => self.triggers.push(trigger),
        }
    }

    pub fn get(&self, phrase: &str) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.phrase == phrase)
    }

    pub fn find(&self, text: &str) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.matches(text))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }
}
