use tracing::warn;

/// Receives recoverable registration failures.
///
/// A reported error means the offending registration was skipped and the
/// rest of the batch proceeds. Implementations must not panic back into
/// the caller.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str, cause: Option<&(dyn std::error::Error + 'static)>);
}

/// Default reporter that logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, message: &str, cause: Option<&(dyn std::error::Error + 'static)>) {
        match cause {
            Some(cause) => warn!(error = %cause, "{message}"),
            None => warn!("{message}"),
        }
    }
}
