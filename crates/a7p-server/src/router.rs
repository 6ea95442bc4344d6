use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler::{self, AppState};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const FILE_LIST: &str = "/filelist";
    pub const FILES: &str = "/files";
}

/// Build the axum router with all profile endpoints.
///
/// Paths outside the API are served from `config.static_dir` when set.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(
            endpoints::FILE_LIST,
            get(handler::list_handler).fallback(handler::method_not_allowed),
        )
        .route(
            endpoints::FILES,
            get(handler::get_file_handler)
                .put(handler::put_file_handler)
                .delete(handler::delete_file_handler)
                .fallback(handler::method_not_allowed),
        );

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
