use std::sync::Arc;

use dormhub_core::images::ImageStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted and the rest
/// sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, injected per request via the extractor.
    pub pool: dormhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Room photo store writing into `config.image_dir`.
    pub images: ImageStore,
}
