use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::helpers::{fmt_num, percent, resource_pair};
use crate::models::views::{
    CardView, NODE_COLUMNS, RESOURCE_DETAIL_COLUMNS, RowView, TableView, queue_columns,
};
use crate::models::yarn::{
    CapacityQueue, ClusterResource, NodeRecord, QueueRecord, QueueUser, ResourceMetrics,
    ScheduleType, normalize_queues,
};
use crate::AppState;

// --- View State ---

/// Latest snapshot fields backing the view. Replaced wholesale by `apply`;
/// a failed fetch leaves the defaults in place.
struct ResourceViewState {
    nodes: Vec<NodeRecord>,
    metrics: ResourceMetrics,
    /// `None` means the snapshot reported a scheduler outside the known set.
    schedule_type: Option<ScheduleType>,
    queues: Vec<QueueRecord>,
}

impl Default for ResourceViewState {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            metrics: ResourceMetrics::default(),
            schedule_type: Some(ScheduleType::Capacity),
            queues: Vec::new(),
        }
    }
}

impl ResourceViewState {
    fn apply(&mut self, data: ClusterResource) {
        self.queues = normalize_queues(&data);
        if let Some(info) = &data.schedule_info {
            self.schedule_type = ScheduleType::parse(&info.schedule_type);
        }
        if let Some(metrics) = data.resource_metrics {
            self.metrics = metrics;
        }
        self.nodes = data.nodes;
    }
}

// --- Selection ---

/// Click-to-expand toggle: selecting the already-selected queue collapses it,
/// selecting another switches directly.
fn toggle_selection(current: Option<&str>, queue_name: &str) -> Option<String> {
    match current {
        Some(selected) if selected == queue_name => None,
        _ => Some(queue_name.to_string()),
    }
}

fn resources_url(cluster: Option<&str>, queue: Option<&str>) -> String {
    let mut url = String::from("/ui/resources");
    let mut sep = '?';
    if let Some(cluster) = cluster {
        url.push(sep);
        url.push_str("cluster=");
        url.push_str(cluster);
        sep = '&';
    }
    if let Some(queue) = queue {
        url.push(sep);
        url.push_str("queue=");
        url.push_str(queue);
    }
    url
}

// --- View Builders ---

fn build_cards(metrics: &ResourceMetrics) -> Vec<CardView> {
    vec![
        CardView {
            kind: "cpu",
            title: "CPU（core）",
            used: fmt_num(metrics.used_cores),
            total: fmt_num(metrics.total_cores),
            rate: fmt_num(metrics.cores_rate),
        },
        CardView {
            kind: "memory",
            title: "内存（GB）",
            used: fmt_num(metrics.used_mem),
            total: fmt_num(metrics.total_mem),
            rate: fmt_num(metrics.mem_rate),
        },
    ]
}

fn build_node_row(node: &NodeRecord) -> RowView {
    RowView {
        key: node.node_name.clone(),
        cells: vec![
            node.node_name.clone(),
            fmt_num(node.used_memory),
            fmt_num(node.total_memory),
            fmt_num(node.used_virtual_cores),
            fmt_num(node.total_virtual_cores),
        ],
        detail_href: None,
    }
}

fn build_queue_row(record: &QueueRecord, selected: Option<&str>, cluster: Option<&str>) -> RowView {
    match record {
        QueueRecord::Capacity(q) => RowView {
            key: q.queue_name.clone(),
            cells: vec![
                q.queue_name.clone(),
                percent(q.used_capacity),
                percent(q.capacity),
                percent(q.max_capacity),
            ],
            detail_href: Some(resources_url(
                cluster,
                toggle_selection(selected, &q.queue_name).as_deref(),
            )),
        },
        QueueRecord::Fair(q) => RowView {
            key: q.queue_name.clone(),
            cells: vec![
                q.queue_name.clone(),
                resource_pair(q.used_resources.memory, q.used_resources.v_cores),
                resource_pair(q.max_resources.memory, q.max_resources.v_cores),
                resource_pair(q.min_resources.memory, q.min_resources.v_cores),
            ],
            detail_href: None,
        },
        QueueRecord::Fifo(q) => RowView {
            key: "FIFO".to_string(),
            cells: vec![
                fmt_num(q.capacity),
                fmt_num(q.used_capacity),
                q.num_nodes.to_string(),
            ],
            detail_href: None,
        },
    }
}

fn build_user_row(user: &QueueUser) -> RowView {
    RowView {
        key: user.username.clone(),
        cells: vec![
            user.username.clone(),
            resource_pair(user.resources_used.memory, user.resources_used.v_cores),
            user.num_active_applications.to_string(),
            user.num_pending_applications.to_string(),
        ],
        detail_href: None,
    }
}

/// The drill-down only applies to Capacity queues, which alone carry users.
fn selected_capacity_queue<'a>(
    queues: &'a [QueueRecord],
    selected: Option<&str>,
) -> Option<&'a CapacityQueue> {
    let name = selected?;
    queues.iter().find_map(|record| match record {
        QueueRecord::Capacity(q) if q.queue_name == name => Some(q),
        _ => None,
    })
}

// --- Page ---

#[derive(Template)]
#[template(path = "resources.html")]
struct ResourcesTemplate {
    title: String,
    cluster: String,
    fetched_at: String,
    cards: Vec<CardView>,
    tables: Vec<TableView>,
}

#[derive(Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub queue: Option<String>,
}

pub async fn handle_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> Response {
    let cluster = query
        .cluster
        .clone()
        .unwrap_or_else(|| state.config.cluster_name.clone());

    let mut view = ResourceViewState::default();
    let mut fetched_at = "-".to_string();
    match state.client.get_cluster_resources(Some(&cluster)).await {
        Ok(data) => {
            view.apply(data);
            fetched_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        }
        Err(e) => warn!("cluster resources unavailable: {}", e),
    }

    let selected = query.queue.as_deref();
    let cluster_param = query.cluster.as_deref();

    let type_label = view.schedule_type.map(|t| t.as_str()).unwrap_or("-");

    let mut tables = vec![
        TableView {
            title: "Yarn-NodeManager 资源使用".to_string(),
            desc: String::new(),
            columns: NODE_COLUMNS,
            rows: view.nodes.iter().map(build_node_row).collect(),
        },
        TableView {
            title: format!("各资源队列资源使用（调度方式：{}）", type_label),
            desc: String::new(),
            columns: queue_columns(view.schedule_type),
            rows: view
                .queues
                .iter()
                .map(|q| build_queue_row(q, selected, cluster_param))
                .collect(),
        },
    ];

    if let Some(target) = selected_capacity_queue(&view.queues, selected) {
        tables.push(TableView {
            title: "资源详情".to_string(),
            desc: target.queue_name.clone(),
            columns: RESOURCE_DETAIL_COLUMNS,
            rows: target.users.iter().map(build_user_row).collect(),
        });
    }

    let tmpl = ResourcesTemplate {
        title: "集群资源".to_string(),
        cluster,
        fetched_at,
        cards: build_cards(&view.metrics),
        tables,
    };

    render_template(&tmpl)
}

fn render_template(tmpl: &impl Template) -> Response {
    match tmpl.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
