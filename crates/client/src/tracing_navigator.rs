//! Navigator for headless embedders. Logs navigation to tracing output.

use tracing::info;

use wayfarer_application::Navigator;

/// Navigator that records navigation requests in the log.
///
/// The default for embedders without a routing surface; interactive
/// embedders supply their own [`Navigator`] instead.
#[derive(Debug, Clone)]
pub struct TracingNavigator;

impl TracingNavigator {
    /// Creates a new tracing navigator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for TracingNavigator {
    fn navigate(&self, target: &str) {
        info!(to = target, "navigation requested");
    }
}
