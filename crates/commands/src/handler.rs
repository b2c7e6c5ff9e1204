use std::{fmt, sync::Arc};

/// A command implementation. The registry only needs the path for help
/// generation; execution lives behind the handler in the host.
pub trait CommandHandler: Send + Sync {
    /// Space-delimited hierarchical path, e.g. `"town invite"`.
    fn path(&self) -> &str;
}

/// A registered command: its full path plus the handler behind it.
#[derive(Clone)]
pub struct CommandEntry {
    path: String,
    handler: Arc<dyn CommandHandler>,
}

impl CommandEntry {
    pub(crate) fn new(path: String, handler: Arc<dyn CommandHandler>) -> Self {
        Self { path, handler }
    }

    /// Full path, e.g. `"town invite"`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path's tokens in order, e.g. `["town", "invite"]`.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.path.split(' ')
    }

    #[must_use]
    pub fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
