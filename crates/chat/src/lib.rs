//! The message-send surface: classify a sender, build a chat event, and
//! hand it to the delivery collaborator.
//!
//! A send consults exactly one channel's scoring rule for the sender
//! and captures the resulting score/group on the event; delivery then
//! tests every candidate recipient against that same score. Fan-out to
//! connected identities is the host's concern.

pub mod error;
pub mod event;
pub mod send;

pub use {
    error::{Result, SendError},
    event::{ChatEvent, ChatMessage, SystemChatEvent},
    send::{MessageBus, send_chat_message, send_system_message},
};
