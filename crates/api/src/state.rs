use std::sync::Arc;

use fixhub_ai::GeminiClient;

use crate::config::ServerConfig;

/// State handed to every handler through `State<AppState>`.
///
/// Clones are cheap: the pool is internally shared and the rest sits
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: fixhub_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Client for analysis, guidance, and diagram generation.
    pub ai: Arc<GeminiClient>,
}
