//! End-to-end delivery flow: registry → send → per-recipient filtering.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use {
    parley_channels::{
        Channel, ChannelColor, ChannelRegistry, RecipientTestResult, RegistrationSink,
        TickScheduler,
    },
    parley_chat::{ChatEvent, MessageBus, SystemChatEvent, send_chat_message},
    parley_common::Recipient,
    rstest::rstest,
    std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    },
};

struct Player {
    name: String,
}

impl Recipient for Player {
    fn id(&self) -> &str {
        &self.name
    }
}

fn player(name: &str) -> Player {
    Player { name: name.into() }
}

#[derive(Default)]
struct ImmediateScheduler;

impl TickScheduler for ImmediateScheduler {
    fn run_on_next_tick(&self, task: Box<dyn FnOnce() + Send>) {
        task();
    }
}

#[derive(Default)]
struct RecordingSink {
    registered: Mutex<Vec<String>>,
}

impl RegistrationSink for RecordingSink {
    fn channel_registered(&self, channel: &Arc<Channel>) {
        self.registered
            .lock()
            .unwrap()
            .push(channel.id().to_string());
    }
}

#[derive(Default)]
struct CollectingBus {
    events: Mutex<Vec<ChatEvent>>,
}

impl MessageBus for CollectingBus {
    fn chat_message(&self, event: &ChatEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn system_message(&self, _event: &mut SystemChatEvent) {}
}

/// Town chat: every member's score is their town's index.
fn town_channel() -> Channel {
    let towns: HashMap<String, i32> = HashMap::from([
        ("alice".into(), 0),
        ("amber".into(), 0),
        ("bob".into(), 1),
    ]);
    Channel::new(
        "Town",
        ChannelColor::Blue,
        "tc",
        move |r: &dyn Recipient| match towns.get(r.id()) {
            Some(&idx) => RecipientTestResult::success(idx, format!("town:{idx}")),
            None => RecipientTestResult::error("You are not in a town."),
        },
    )
}

fn booted_registry() -> (ChannelRegistry, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let sink_handle: Arc<dyn RegistrationSink> = sink.clone();
    let registry = ChannelRegistry::new(Arc::new(ImmediateScheduler), sink_handle);
    (registry, sink)
}

#[test]
fn registration_is_announced_and_listed_in_order() {
    let (mut registry, sink) = booted_registry();
    registry.register(Channel::global("General", ChannelColor::White, "g"));
    registry.register(town_channel());

    let ids: Vec<_> = registry.list().iter().map(|c| c.id().to_string()).collect();
    assert_eq!(ids, ["g", "tc"]);
    assert_eq!(*sink.registered.lock().unwrap(), ["g", "tc"]);
}

#[rstest]
#[case("alice", "amber", true)] // same town
#[case("alice", "bob", false)] // different town
#[case("alice", "stranger", false)] // recipient failed the rule
fn town_messages_stay_in_the_sender_partition(
    #[case] sender: &str,
    #[case] recipient: &str,
    #[case] delivered: bool,
) {
    let (mut registry, _sink) = booted_registry();
    let town = registry.register(town_channel());

    let bus = CollectingBus::default();
    let event = send_chat_message(&bus, &town, &player(sender), "anyone selling dirt?").unwrap();

    assert!(event.should_send_to(&player(sender)));
    assert_eq!(event.should_send_to(&player(recipient)), delivered);
}

#[test]
fn global_channel_reaches_everyone_with_one_group() {
    let (mut registry, _sink) = booted_registry();
    let general = registry.register(Channel::global("General", ChannelColor::White, "g"));

    let bus = CollectingBus::default();
    let event = send_chat_message(&bus, &general, &player("stranger"), "hello world").unwrap();

    for name in ["alice", "bob", "stranger"] {
        assert!(event.should_send_to(&player(name)));
    }
    assert_eq!(event.message().group_id(), parley_channels::GROUP_EVERYONE);
    assert_eq!(bus.events.lock().unwrap().len(), 1);
}

#[test]
fn sender_outside_any_town_cannot_send() {
    let (mut registry, _sink) = booted_registry();
    let town = registry.register(town_channel());

    let bus = CollectingBus::default();
    let err = send_chat_message(&bus, &town, &player("stranger"), "hi").unwrap_err();
    assert_eq!(err.to_string(), "You are not in a town.");
    assert!(bus.events.lock().unwrap().is_empty());
}
