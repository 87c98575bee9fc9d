use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::models::yarn::{QueueRecord, normalize_queues};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterQuery {
    #[serde(default)]
    pub cluster_name: Option<String>,
}

/// Raw snapshot re-export for sibling tools.
pub async fn handle_cluster_resources(
    State(state): State<AppState>,
    Query(query): Query<ClusterQuery>,
) -> Response {
    let cluster = query
        .cluster_name
        .unwrap_or_else(|| state.config.cluster_name.clone());

    match state.client.get_cluster_resources(Some(&cluster)).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueListResponse {
    pub fetched_at: DateTime<Utc>,
    pub schedule_type: String,
    pub queues: Vec<QueueRecord>,
}

/// Normalized queue list, so sibling views reuse it without a second
/// backend fetch.
pub async fn handle_queue_list(
    State(state): State<AppState>,
    Query(query): Query<ClusterQuery>,
) -> Response {
    let cluster = query
        .cluster_name
        .unwrap_or_else(|| state.config.cluster_name.clone());

    match state.client.get_cluster_resources(Some(&cluster)).await {
        Ok(data) => {
            let queues = normalize_queues(&data);
            let schedule_type = data
                .schedule_info
                .map(|info| info.schedule_type)
                .unwrap_or_default();
            Json(QueueListResponse {
                fetched_at: Utc::now(),
                schedule_type,
                queues,
            })
            .into_response()
        }
        Err(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
    }
}

pub async fn handle_healthz() -> &'static str {
    "ok\n"
}
