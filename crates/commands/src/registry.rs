use {
    parley_common::ErrorReporter,
    std::sync::Arc,
    tracing::{debug, info},
};

use crate::{
    error::Error,
    handler::{CommandEntry, CommandHandler},
};

/// Header line prepended to every subcommand listing.
const SUBCOMMANDS_HEADER: &str = "---- Subcommands ----";

/// Fallible constructor for a command handler. Batch registration walks
/// an explicit list of these in place of any runtime discovery.
pub type CommandFactory =
    Box<dyn Fn() -> parley_common::Result<Arc<dyn CommandHandler>> + Send + Sync>;

/// Append-only path → command store.
///
/// Populated at startup, read-mostly afterward; lookups and help
/// queries scan linearly, which is fine at registry scale. Registering
/// two commands at the same path keeps the most recent handler.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    reporter: Arc<dyn ErrorReporter>,
}

impl CommandRegistry {
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            entries: Vec::new(),
            reporter,
        }
    }

    /// Registers a pre-built handler. Returns whether the entry was
    /// stored.
    ///
    /// An empty path is reported to the error collaborator and the
    /// entry is skipped; nothing partially-valid is ever inserted. A
    /// valid path overwrites any prior entry at the same path.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> bool {
        let path = handler.path().trim().to_string();
        if path.is_empty() {
            self.reporter.report(
                "an error occurred while registering a command",
                Some(&Error::EmptyPath),
            );
            return false;
        }

        let entry = CommandEntry::new(path, handler);
        match self.entries.iter().position(|e| e.path() == entry.path()) {
            Some(i) => {
                debug!(path = %entry.path(), "command path re-registered, replacing");
                self.entries[i] = entry;
            },
            None => {
                debug!(path = %entry.path(), "command registered");
                self.entries.push(entry);
            },
        }
        true
    }

    /// Constructs a handler through `factory`, then registers it.
    /// Returns whether the command was stored; construction failure is
    /// reported and the command skipped.
    pub fn register_built<F>(&mut self, factory: F) -> bool
    where
        F: FnOnce() -> parley_common::Result<Arc<dyn CommandHandler>>,
    {
        match factory() {
            Ok(handler) => self.register(handler),
            Err(source) => {
                self.reporter.report(
                    "an error occurred while constructing a command",
                    Some(&Error::Construction { source }),
                );
                false
            },
        }
    }

    /// Registers every command in an explicit discovery list. Returns
    /// how many commands were actually stored.
    ///
    /// Each entry is constructed and registered independently; one
    /// failure never aborts the rest of the batch.
    pub fn register_batch(&mut self, factories: impl IntoIterator<Item = CommandFactory>) -> usize {
        let mut attempted = 0usize;
        let mut registered = 0usize;
        for factory in factories {
            if self.register_built(|| factory()) {
                registered += 1;
            }
            attempted += 1;
        }
        info!(registered, attempted, "command batch registered");
        registered
    }

    /// The entry registered at exactly `path`, if any.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.path() == path)
    }

    /// All commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Help lines for the immediate children of `path`: a header line,
    /// then `/<child path>` for every registered path extending `path`
    /// by exactly one token, in registration order. Paths extending it
    /// by more than one token are grandchildren and are skipped.
    #[must_use]
    pub fn subcommands_of(&self, path: &str) -> Vec<String> {
        let mut lines = vec![SUBCOMMANDS_HEADER.to_string()];
        let prefix = format!("{path} ");
        for entry in &self.entries {
            let Some(rest) = entry.path().strip_prefix(&prefix) else {
                continue;
            };
            // A further space means a grandchild, not an immediate child.
            if rest.contains(' ') {
                continue;
            }
            lines.push(format!("/{}", entry.path()));
        }
        lines
    }
}
