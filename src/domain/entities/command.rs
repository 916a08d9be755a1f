/// A single user utterance as received, plus its lowercased and trimmed
/// form. All intent matching runs against the normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    original: String,
    normalized: String,
}

impl Command {
    pub fn new(input: impl Into<String>) -> Self {
        let original = input.into();
        let normalized = original.to_lowercase().trim().to_string();
        Self { original, normalized }
    }

    /// The input with surrounding whitespace removed, case preserved.
    pub fn trimmed(&self) -> &str {
        self.original.trim()
    }

    /// Lowercased, trimmed text.
    pub fn text(&self) -> &str {
        &self.normalized
    }

    /// True only for a zero-length input; whitespace still counts as input.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.normalized.contains(needle)
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.normalized.contains(n))
    }

    pub fn contains_any_char(&self, chars: &str) -> bool {
        self.normalized.chars().any(|c| chars.contains(c))
    }
}

impl From<&str> for Command {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}
