use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key contains no letters, so there is nothing to repeat
    /// across the message.
    #[error("key has no alphabetic characters")]
    EmptyKey,
}
