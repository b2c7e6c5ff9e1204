//! Chat channels and the recipient scoring protocol.
//!
//! A channel is a named routing rule plus presentation metadata. Routing
//! is equality of two independently computed scores: a message captures
//! the sender's score once at send time, and a candidate recipient is
//! eligible iff their own score matches it. Partitioned channels (town
//! chat) return the partition index as the score; binary allow/deny
//! channels return zero for everyone who passes. The channel itself
//! never learns what a partition means — that lives in the injected
//! scoring rule.

pub mod channel;
pub mod config;
pub mod registry;
pub mod result;

pub use {
    channel::{
        Channel, ChannelColor, GROUP_EVERYONE, SCORE_SEND_NOPE, SCORE_SEND_OK, in_group_rule,
        pass_fail_channel_rule, pass_fail_rule,
    },
    config::ChannelDefinition,
    registry::{ChannelRegistry, RegistrationSink, TickScheduler},
    result::RecipientTestResult,
};
