use thiserror::Error;

/// Failure reported by the host when it could not fetch clipboard contents for a paste.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard does not contain text")]
    NotText,
}
