use {parley_channels::Channel, parley_common::Recipient, std::sync::Arc};

// ── ChatMessage ─────────────────────────────────────────────────────────────

/// A message classified against one channel at send time.
///
/// `score` and `group_id` are captured once when the message is
/// produced; every candidate recipient is then tested against this
/// score, which is what restricts delivery to the producer's own
/// partition without any membership lists.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    channel: Arc<Channel>,
    message: String,
    score: i32,
    group_id: String,
}

impl ChatMessage {
    pub(crate) fn new(channel: Arc<Channel>, message: String, score: i32, group_id: String) -> Self {
        Self {
            channel,
            message,
            score,
            group_id,
        }
    }

    #[must_use]
    pub fn channel(&self) -> &Arc<Channel> {
        &self.channel
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The reference score every recipient is compared against.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Delivery-time test: only recipients scoring exactly the captured
    /// reference score receive the message.
    pub fn should_send_to(&self, recipient: &dyn Recipient) -> bool {
        self.channel.is_eligible_for(recipient, self.score)
    }
}

// ── ChatEvent ───────────────────────────────────────────────────────────────

/// A player-sent chat message.
#[derive(Debug, Clone)]
pub struct ChatEvent {
    message: ChatMessage,
    sender_id: String,
}

impl ChatEvent {
    pub(crate) fn new(message: ChatMessage, sender_id: String) -> Self {
        Self { message, sender_id }
    }

    #[must_use]
    pub fn message(&self) -> &ChatMessage {
        &self.message
    }

    #[must_use]
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn should_send_to(&self, recipient: &dyn Recipient) -> bool {
        self.message.should_send_to(recipient)
    }
}

// ── SystemChatEvent ─────────────────────────────────────────────────────────

/// A system announcement on a channel.
///
/// On top of the score test, recipients on the exception list never
/// receive it — even when their partition matches.
#[derive(Debug, Clone)]
pub struct SystemChatEvent {
    message: ChatMessage,
    exceptions: Vec<String>,
    handled: bool,
}

impl SystemChatEvent {
    pub(crate) fn new(message: ChatMessage, exceptions: Vec<String>) -> Self {
        Self {
            message,
            exceptions,
            handled: false,
        }
    }

    #[must_use]
    pub fn message(&self) -> &ChatMessage {
        &self.message
    }

    /// Recipient ids excluded regardless of score.
    #[must_use]
    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    pub fn should_send_to(&self, recipient: &dyn Recipient) -> bool {
        !self.exceptions.iter().any(|e| e == recipient.id())
            && self.message.should_send_to(recipient)
    }

    /// Marks the event as consumed by a collector.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    #[must_use]
    pub fn handled(&self) -> bool {
        self.handled
    }
}
