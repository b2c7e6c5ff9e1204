//! Collaborator seams and error definitions shared across all parley crates.
//!
//! The host environment (player sessions, permission plugin, tick loop)
//! stays behind the traits defined here; the registries and the scoring
//! protocol never see anything more concrete.

pub mod error;
pub mod identity;
pub mod report;

pub use {
    error::{Error, Result},
    identity::{GroupBackend, Recipient},
    report::{ErrorReporter, LogReporter},
};
