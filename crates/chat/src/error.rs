/// Errors returned to the caller of a send operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The sender failed the channel's scoring rule. The message is for
    /// the sender only and must never be broadcast.
    #[error("{message}")]
    Ineligible { message: String },
}

pub type Result<T> = std::result::Result<T, SendError>;
