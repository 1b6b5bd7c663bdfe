// ============================================================================
// Logging
// fmt subscriber installation (requires the "logging" feature)
// ============================================================================

use std::fmt;
use tracing::Level;

/// A global subscriber could not be installed
#[derive(Debug)]
pub struct LoggingError(String);

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to install tracing subscriber: {}", self.0)
    }
}

impl std::error::Error for LoggingError {}

/// Install a global fmt subscriber that records events at `level` and above.
///
/// # Errors
/// Returns `LoggingError` if a global subscriber is already set.
pub fn init_tracing(level: Level) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingError(err.to_string()))?;

    tracing::debug!(%level, "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // The first call may race other tests; the second always sees a subscriber
        let _ = init_tracing(Level::DEBUG);
        assert!(init_tracing(Level::DEBUG).is_err());
    }
}
