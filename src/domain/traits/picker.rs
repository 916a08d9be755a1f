use rand::seq::SliceRandom;

/// Chooses one canned reply out of a trigger's reply set.
pub trait ReplyPicker: Send + Sync {
    fn pick<'a>(&self, replies: &'a [String]) -> Option<&'a str>;
}

/// Uniform random choice using the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl ReplyPicker for RandomPicker {
    fn pick<'a>(&self, replies: &'a [String]) -> Option<&'a str> {
        replies.choose(&mut rand::thread_rng()).map(String::as_str)
    }
}

/// Always the first reply. Makes canned responses deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl ReplyPicker for FirstPicker {
    fn pick<'a>(&self, replies: &'a [String]) -> Option<&'a str> {
        replies.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_stays_in_set() {
        let replies = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        for _ in 0..50 {
            let picked = RandomPicker.pick(&replies).unwrap();
            assert!(replies.iter().any(|r| r == picked));
        }
    }

    #[test]
    fn empty_set_yields_nothing() {
        assert_eq!(RandomPicker.pick(&[]), None);
        assert_eq!(FirstPicker.pick(&[]), None);
    }
}
