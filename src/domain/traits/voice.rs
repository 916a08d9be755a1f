use async_trait::async_trait;

/// Output side of a voice-style front end (text-to-speech, terminal, ...).
#[async_trait]
pub trait Speaker: Send + Sync {
    async fn speak(&self, text: &str);
}

/// Input side of a voice-style front end. `None` means the input stream
/// has ended.
#[async_trait]
pub trait Listener: Send + Sync {
    async fn listen(&self) -> Option<String>;
}
