pub mod api;
pub mod ui;

use axum::{
    Router,
    routing::get,
};
use tower_http::{
    compression::CompressionLayer, services::ServeDir, trace::TraceLayer,
};

use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // JSON API
        .route("/api/v1/cluster/resources", get(api::handle_cluster_resources))
        .route("/api/v1/cluster/queues", get(api::handle_queue_list))
        // Health
        .route("/healthz", get(api::handle_healthz))
        // Console UI
        .route("/ui/resources", get(ui::handle_resources))
        // Static files
        .nest_service("/ui/static", ServeDir::new("static"))
        // Root redirect
        .route(
            "/",
            get(|| async {
                axum::response::Redirect::to("/ui/resources")
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
