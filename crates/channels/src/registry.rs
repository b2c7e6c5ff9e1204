use {
    std::sync::Arc,
    tracing::{info, warn},
};

use crate::channel::Channel;

// ── Host collaborators ──────────────────────────────────────────────────────

/// One-shot deferral onto the host's cooperative tick loop.
///
/// The host runs the task on its next tick, after boot completes. A
/// requested task cannot be canceled and never repeats.
pub trait TickScheduler: Send + Sync {
    fn run_on_next_tick(&self, task: Box<dyn FnOnce() + Send>);
}

/// Receives a "channel registered" notification exactly once per
/// registration, after host boot.
pub trait RegistrationSink: Send + Sync {
    fn channel_registered(&self, channel: &Arc<Channel>);
}

// ── ChannelRegistry ─────────────────────────────────────────────────────────

/// Append-only, insertion-ordered collection of channels.
///
/// Populated during startup on a single thread and read-mostly
/// afterward. There is no removal and no de-duplication of ids; a
/// duplicate registration keeps both entries and only the most recent
/// one resolves through [`get`](Self::get).
pub struct ChannelRegistry {
    channels: Vec<Arc<Channel>>,
    scheduler: Arc<dyn TickScheduler>,
    sink: Arc<dyn RegistrationSink>,
}

impl ChannelRegistry {
    pub fn new(scheduler: Arc<dyn TickScheduler>, sink: Arc<dyn RegistrationSink>) -> Self {
        Self {
            channels: Vec::new(),
            scheduler,
            sink,
        }
    }

    /// Appends a channel and schedules its registration announcement on
    /// the host's next tick.
    ///
    /// Registration can happen before the collaborator delivering
    /// notifications is itself ready; the deferral guarantees the sink
    /// only hears about the channel once the host has booted.
    pub fn register(&mut self, channel: Channel) -> Arc<Channel> {
        let channel = Arc::new(channel);
        if self.channels.iter().any(|c| c.id() == channel.id()) {
            warn!(channel = %channel.id(), "duplicate channel id registered");
        }
        self.channels.push(Arc::clone(&channel));
        info!(channel = %channel.id(), "chat channel registered");

        let sink = Arc::clone(&self.sink);
        let announced = Arc::clone(&channel);
        self.scheduler
            .run_on_next_tick(Box::new(move || sink.channel_registered(&announced)));
        channel
    }

    /// All channels in registration order, stable for the process
    /// lifetime.
    #[must_use]
    pub fn list(&self) -> &[Arc<Channel>] {
        &self.channels
    }

    /// Resolves a channel by id. With duplicate registrations the most
    /// recent one wins.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Channel>> {
        self.channels.iter().rev().find(|c| c.id() == id)
    }
}
