/// Reasons a single registration is rejected.
///
/// These are handed to the [`ErrorReporter`](parley_common::ErrorReporter)
/// collaborator as causes; the registry never returns them to callers,
/// so one bad command cannot abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the command path is empty")]
    EmptyPath,

    #[error("command construction failed")]
    Construction {
        #[source]
        source: parley_common::Error,
    },
}
