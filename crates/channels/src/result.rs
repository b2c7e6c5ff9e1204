use serde::Serialize;

/// Outcome of testing one recipient against one channel's scoring rule.
///
/// Exactly one case is ever active: a rule either rejects the recipient
/// with a message, or places them in a partition. The never-send
/// sentinel used when a rule errors stays internal to
/// [`Channel::score_for`](crate::Channel::score_for), so callers never
/// see a score and an error at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecipientTestResult {
    /// The recipient may not see the message. The message is shown to
    /// that recipient only, never broadcast.
    Error { message: String },
    /// The recipient is eligible. `score` identifies the partition they
    /// belong to (the town index, for town chat); `group_id` names it.
    Success { score: i32, group_id: String },
}

impl RecipientTestResult {
    /// Result for an ineligible recipient.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Result for an eligible recipient. `score` must be non-negative;
    /// negative values are reserved for the never-send sentinel.
    #[must_use]
    pub fn success(score: i32, group_id: impl Into<String>) -> Self {
        debug_assert!(score >= 0, "success scores are non-negative");
        Self::Success {
            score,
            group_id: group_id.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
