use crate::domain::entities::{Command, TriggerTable};

/// Words that route a command to the arithmetic interpreter.
pub const MATH_KEYWORDS: &[&str] = &[
    "plus",
    "minus",
    "times",
    "multiply",
    "divide",
    "divided by",
    "add",
    "subtract",
    "power",
    "square root",
    "cube root",
    "factorial",
    "mod",
    "modulo",
];

/// Characters that route a command to the arithmetic interpreter.
pub const MATH_SYMBOLS: &str = "+-*/%";

/// What a command should be answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Zero-length input
    Empty,
    /// A canned reply from the named trigger's reply set
    Canned { trigger: String },
    Time,
    Date,
    Math,
    /// Hand the command to the generation provider
    Delegate,
}

/// Rule predicate type
pub type Predicate = Box<dyn Fn(&Command) -> bool + Send + Sync>;

/// One entry of the ordered rule list
pub struct Rule {
    pub name: String,
    pub intent: Intent,
    predicate: Predicate,
}

impl Rule {
    pub fn new(name: impl Into<String>, intent: Intent) -> Self {
        Self {
            name: name.into(),
            intent,
            predicate: Box::new(|_: &Command| false),
        }
    }

    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Command) -> bool + Send + Sync + 'static,
    {
        self.predicate = Box::new(predicate);
        self
    }

    pub fn matches(&self, command: &Command) -> bool {
        (self.predicate)(command)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("intent", &self.intent)
            .finish()
    }
}

/// Classifies commands by walking an ordered rule list; the first matching
/// rule wins and commands nothing matches are delegated.
pub struct IntentClassifier {
    triggers: TriggerTable,
    rules: Vec<Rule>,
}

impl IntentClassifier {
    /// One rule per trigger in table order, then travel, time, date and
    /// math.
    pub fn new(triggers: TriggerTable) -> Self {
        let mut rules: Vec<Rule> = triggers
            .iter()
            .map(|t| {
                let phrase = t.phrase.clone();
                Rule::new(
                    format!("trigger:{}", t.phrase),
                    Intent::Canned { trigger: t.phrase.clone() },
                )
                .when(move |cmd| cmd.contains(&phrase))
            })
            .collect();

        if triggers.get("trip").is_some() {
            rules.push(
                Rule::new("travel", Intent::Canned { trigger: "trip".to_string() })
                    .when(|cmd| cmd.contains("travel")),
            );
        }

        rules.push(Rule::new("time", Intent::Time).when(|cmd| cmd.contains("time")));
        rules.push(
            Rule::new("date", Intent::Date).when(|cmd| cmd.contains_any(&["date", "day"])),
        );
        rules.push(Rule::new("math", Intent::Math).when(|cmd| {
            cmd.contains_any(MATH_KEYWORDS) || cmd.contains_any_char(MATH_SYMBOLS)
        }));

        Self { triggers, rules }
    }

    pub fn classify(&self, command: &Command) -> Intent {
        if command.is_empty() {
            return Intent::Empty;
        }

        match self.rules.iter().find(|r| r.matches(command)) {
            Some(rule) => {
                tracing::debug!("'{}' matched rule {}", command.text(), rule.name);
                rule.intent.clone()
            }
            None => Intent::Delegate,
        }
    }

    /// Replies for a trigger phrase, as referenced by [`Intent::Canned`].
    pub fn replies(&self, trigger: &str) -> &[String] {
        self.triggers
            .get(trigger)
            .map(|t| t.replies.as_slice())
            .unwrap_or(&[])
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}
