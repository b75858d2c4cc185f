use std::sync::Arc;

use crate::config::Config;
use crate::publishing::gateway::Publisher;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable: concurrent requests never observe each other.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable publisher. Default: WordPressClient.
    pub publisher: Arc<dyn Publisher>,
}
