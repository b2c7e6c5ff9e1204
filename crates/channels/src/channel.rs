use {
    parley_common::{GroupBackend, Recipient},
    serde::{Deserialize, Serialize},
    std::{fmt, sync::Arc},
};

use crate::result::RecipientTestResult;

/// Score meaning it's OK to send without defining any partition. See
/// [`GROUP_EVERYONE`].
pub const SCORE_SEND_OK: i32 = 0;
/// Score meaning the recipient may never see the message. Any negative
/// value has the same effect.
pub const SCORE_SEND_NOPE: i32 = -1;
/// Group covering everyone who has access to the channel — not
/// necessarily every connected identity.
pub const GROUP_EVERYONE: &str = "everyone";

// ── Scoring rules ───────────────────────────────────────────────────────────

/// A scoring rule: classifies one candidate recipient for one message.
pub type ScoringRule = Box<dyn Fn(&dyn Recipient) -> RecipientTestResult + Send + Sync>;

/// A scoring rule that also reads state on its owning channel.
pub type ChannelScoringRule =
    Box<dyn Fn(&Channel, &dyn Recipient) -> RecipientTestResult + Send + Sync>;

enum Rule {
    Plain(ScoringRule),
    WithChannel(ChannelScoringRule),
}

// ── Channel ─────────────────────────────────────────────────────────────────

/// Presentation color for a channel. Rendering the matching format codes
/// is the host's concern; the core only carries the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelColor {
    #[default]
    White,
    Gray,
    Red,
    Gold,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
}

/// A named message-routing rule plus presentation metadata.
///
/// Constructed once, registered immediately, immutable thereafter. The
/// `id` doubles as the channel's command token by convention ("mod" for
/// moderator chat), which is a naming convention only — channels and
/// commands never reference each other structurally.
pub struct Channel {
    id: String,
    display_name: String,
    color: ChannelColor,
    rule: Option<Rule>,
}

impl Channel {
    /// Creates a global channel: every identity is eligible, one
    /// implicit partition.
    #[must_use]
    pub fn global(
        display_name: impl Into<String>,
        color: ChannelColor,
        id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            color,
            rule: None,
        }
    }

    /// Creates a channel gated by `rule`.
    #[must_use]
    pub fn new<F>(
        display_name: impl Into<String>,
        color: ChannelColor,
        id: impl Into<String>,
        rule: F,
    ) -> Self
    where
        F: Fn(&dyn Recipient) -> RecipientTestResult + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            color,
            rule: Some(Rule::Plain(Box::new(rule))),
        }
    }

    /// Creates a channel whose rule also receives the channel itself, so
    /// it can read channel state (id, display name) when classifying.
    #[must_use]
    pub fn with_channel_rule<F>(
        display_name: impl Into<String>,
        color: ChannelColor,
        id: impl Into<String>,
        rule: F,
    ) -> Self
    where
        F: Fn(&Channel, &dyn Recipient) -> RecipientTestResult + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            color,
            rule: Some(Rule::WithChannel(Box::new(rule))),
        }
    }

    /// Stable string key, also used as the channel's command token.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name shown at the start of messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn color(&self) -> ChannelColor {
        self.color
    }

    /// True iff no scoring rule is attached.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.rule.is_none()
    }

    /// Raw rule outcome for one recipient. The caller surfaces an error
    /// message to the tested recipient only; it is never broadcast.
    pub fn test(&self, recipient: &dyn Recipient) -> RecipientTestResult {
        match &self.rule {
            None => RecipientTestResult::success(SCORE_SEND_OK, GROUP_EVERYONE),
            Some(Rule::Plain(rule)) => rule(recipient),
            Some(Rule::WithChannel(rule)) => rule(self, recipient),
        }
    }

    /// The recipient's partition score, or [`SCORE_SEND_NOPE`] when the
    /// rule rejected them.
    pub fn score_for(&self, recipient: &dyn Recipient) -> i32 {
        match self.test(recipient) {
            RecipientTestResult::Success { score, .. } => score,
            RecipientTestResult::Error { .. } => SCORE_SEND_NOPE,
        }
    }

    /// The recipient's partition name, or `None` when the rule rejected
    /// them. Global channels always answer [`GROUP_EVERYONE`].
    pub fn group_of(&self, recipient: &dyn Recipient) -> Option<String> {
        match self.test(recipient) {
            RecipientTestResult::Success { group_id, .. } => Some(group_id),
            RecipientTestResult::Error { .. } => None,
        }
    }

    /// Delivery-time test: eligible iff the recipient's score equals the
    /// score captured from the sender when the message was produced. A
    /// recipient whose rule errored scores the sentinel, which never
    /// equals a valid non-negative reference score.
    pub fn is_eligible_for(&self, recipient: &dyn Recipient, reference_score: i32) -> bool {
        self.score_for(recipient) == reference_score
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("color", &self.color)
            .field("global", &self.is_global())
            .finish()
    }
}

// ── Rule builders ───────────────────────────────────────────────────────────

/// Builds a rule from a pass/fail predicate: `Success(0, everyone)` when
/// the predicate holds, `Error(message)` otherwise.
pub fn pass_fail_rule<P>(
    predicate: P,
    message: impl Into<String>,
) -> impl Fn(&dyn Recipient) -> RecipientTestResult + Send + Sync
where
    P: Fn(&dyn Recipient) -> bool + Send + Sync,
{
    let message = message.into();
    move |recipient: &dyn Recipient| {
        if predicate(recipient) {
            RecipientTestResult::success(SCORE_SEND_OK, GROUP_EVERYONE)
        } else {
            RecipientTestResult::error(message.clone())
        }
    }
}

/// Channel-aware variant of [`pass_fail_rule`], for use with
/// [`Channel::with_channel_rule`].
pub fn pass_fail_channel_rule<P>(
    predicate: P,
    message: impl Into<String>,
) -> impl Fn(&Channel, &dyn Recipient) -> RecipientTestResult + Send + Sync
where
    P: Fn(&Channel, &dyn Recipient) -> bool + Send + Sync,
{
    let message = message.into();
    move |channel: &Channel, recipient: &dyn Recipient| {
        if predicate(channel, recipient) {
            RecipientTestResult::success(SCORE_SEND_OK, GROUP_EVERYONE)
        } else {
            RecipientTestResult::error(message.clone())
        }
    }
}

/// Rule passing operators and, when `group` is set, members of that
/// permission group. `None` restricts the channel to operators only.
/// The error message names the required group.
pub fn in_group_rule(
    backend: Arc<dyn GroupBackend>,
    group: Option<String>,
) -> impl Fn(&dyn Recipient) -> RecipientTestResult + Send + Sync {
    let message = format!(
        "You need to be a(n) {} to use this channel.",
        group.as_deref().unwrap_or("OP")
    );
    pass_fail_rule(
        move |recipient: &dyn Recipient| {
            recipient.is_op()
                || group
                    .as_deref()
                    .is_some_and(|g| backend.in_group(recipient, g))
        },
        message,
    )
}
