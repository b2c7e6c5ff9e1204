// ── Recipient ───────────────────────────────────────────────────────────────

/// An identity that can send or receive channel messages.
///
/// The host environment supplies the concrete type (player session,
/// console, bot); the core only ever reads this surface.
pub trait Recipient: Send + Sync {
    /// Stable identifier, unique within the host environment.
    fn id(&self) -> &str;

    /// Whether this identity has operator privileges.
    fn is_op(&self) -> bool {
        false
    }
}

// ── Permission backend ──────────────────────────────────────────────────────

/// Permission-group membership, answered by the host's permission plugin.
///
/// Queried only by the group-gated rule builders; no other part of the
/// core knows what a group is.
pub trait GroupBackend: Send + Sync {
    /// Whether `recipient` is a member of `group`.
    fn in_group(&self, recipient: &dyn Recipient, group: &str) -> bool;
}
