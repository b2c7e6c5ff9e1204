//! Hierarchical command registry for the help/discovery surface.
//!
//! Commands live under space-delimited paths ("town invite"); the
//! registry answers "what are the immediate children of this path" for
//! help generation. Execution and tab-completion stay in the host.
//! Registration is append-only for the process lifetime: a bad entry is
//! reported to the error collaborator and skipped, never inserted half
//! built, and never aborts the rest of a batch.

pub mod error;
pub mod handler;
pub mod registry;

pub use {
    error::Error,
    handler::{CommandEntry, CommandHandler},
    registry::{CommandFactory, CommandRegistry},
};
