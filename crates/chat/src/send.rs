use {
    parley_channels::{Channel, RecipientTestResult},
    parley_common::Recipient,
    std::sync::Arc,
    tracing::debug,
};

use crate::{
    error::{Result, SendError},
    event::{ChatEvent, ChatMessage, SystemChatEvent},
};

/// Delivery collaborator. Receives fully classified events; the actual
/// fan-out to connected identities is the host's concern.
pub trait MessageBus: Send + Sync {
    fn chat_message(&self, event: &ChatEvent);

    /// System events are handed out mutably so a collector can mark
    /// them handled.
    fn system_message(&self, event: &mut SystemChatEvent);
}

/// Classifies the sender against the channel's rule and hands the
/// resulting event to the bus.
///
/// A sender-side rule error is returned to the caller, who surfaces it
/// to the sender only. Sending never proceeds with an errored sender:
/// the never-send sentinel would otherwise match every other errored
/// recipient's score.
pub fn send_chat_message(
    bus: &dyn MessageBus,
    channel: &Arc<Channel>,
    sender: &dyn Recipient,
    message: impl Into<String>,
) -> Result<ChatEvent> {
    let (score, group_id) = match channel.test(sender) {
        RecipientTestResult::Success { score, group_id } => (score, group_id),
        RecipientTestResult::Error { message } => return Err(SendError::Ineligible { message }),
    };

    let event = ChatEvent::new(
        ChatMessage::new(Arc::clone(channel), message.into(), score, group_id),
        sender.id().to_string(),
    );
    debug!(channel = %channel.id(), sender = %event.sender_id(), score, "chat message dispatched");
    bus.chat_message(&event);
    Ok(event)
}

/// Builds a system announcement for an explicit partition and hands it
/// to the bus. The caller picks the score/group pair (there is no
/// sender to classify); `exceptions` are recipient ids excluded even
/// when score-eligible.
pub fn send_system_message(
    bus: &dyn MessageBus,
    channel: &Arc<Channel>,
    message: impl Into<String>,
    score: i32,
    group_id: impl Into<String>,
    exceptions: Vec<String>,
) -> SystemChatEvent {
    let mut event = SystemChatEvent::new(
        ChatMessage::new(Arc::clone(channel), message.into(), score, group_id.into()),
        exceptions,
    );
    debug!(channel = %channel.id(), score, "system message dispatched");
    bus.system_message(&mut event);
    event
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        parley_channels::{ChannelColor, GROUP_EVERYONE, SCORE_SEND_OK, pass_fail_rule},
        std::sync::Mutex,
    };

    struct TestRecipient {
        name: String,
    }

    impl Recipient for TestRecipient {
        fn id(&self) -> &str {
            &self.name
        }
    }

    fn named(name: &str) -> TestRecipient {
        TestRecipient { name: name.into() }
    }

    #[derive(Default)]
    struct RecordingBus {
        chat: Mutex<Vec<String>>,
        system: Mutex<Vec<String>>,
    }

    impl MessageBus for RecordingBus {
        fn chat_message(&self, event: &ChatEvent) {
            self.chat
                .lock()
                .unwrap()
                .push(event.message().message().to_string());
        }

        fn system_message(&self, event: &mut SystemChatEvent) {
            self.system
                .lock()
                .unwrap()
                .push(event.message().message().to_string());
            event.set_handled();
        }
    }

    fn members_only() -> Arc<Channel> {
        Arc::new(Channel::new(
            "Members",
            ChannelColor::Green,
            "m",
            pass_fail_rule(
                |r: &dyn Recipient| r.id() != "outsider",
                "Members only in here.",
            ),
        ))
    }

    #[test]
    fn send_captures_the_sender_score_and_group() {
        let bus = RecordingBus::default();
        let channel = members_only();
        let event = send_chat_message(&bus, &channel, &named("alice"), "hello").unwrap();

        assert_eq!(event.sender_id(), "alice");
        assert_eq!(event.message().score(), SCORE_SEND_OK);
        assert_eq!(event.message().group_id(), GROUP_EVERYONE);
        assert_eq!(*bus.chat.lock().unwrap(), ["hello"]);
    }

    #[test]
    fn ineligible_sender_gets_the_rule_error_and_nothing_is_dispatched() {
        let bus = RecordingBus::default();
        let channel = members_only();
        let err = send_chat_message(&bus, &channel, &named("outsider"), "hi").unwrap_err();

        assert_eq!(
            err,
            SendError::Ineligible {
                message: "Members only in here.".into()
            }
        );
        assert!(bus.chat.lock().unwrap().is_empty());
    }

    #[test]
    fn system_message_reaches_the_bus_and_can_be_marked_handled() {
        let bus = RecordingBus::default();
        let channel = members_only();
        let event = send_system_message(
            &bus,
            &channel,
            "the server restarts soon",
            SCORE_SEND_OK,
            GROUP_EVERYONE,
            vec!["bob".into()],
        );

        assert!(event.handled());
        assert_eq!(*bus.system.lock().unwrap(), ["the server restarts soon"]);
        assert!(event.should_send_to(&named("alice")));
        assert!(!event.should_send_to(&named("bob"))); // exception-listed
        assert!(!event.should_send_to(&named("outsider"))); // failed the rule
    }
}
