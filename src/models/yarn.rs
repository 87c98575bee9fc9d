use serde::{Deserialize, Serialize};

// Wire types for the resource-manager console API. Every sub-field of the
// snapshot may be absent depending on cluster version and scheduler, so
// everything defaults.

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// One point-in-time snapshot of a cluster: node list, aggregate metrics,
/// scheduler info and the scheduler-specific queue payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResource {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub resource_metrics: Option<ResourceMetrics>,
    #[serde(default)]
    pub schedule_info: Option<ScheduleInfo>,
    #[serde(default)]
    pub queues: Vec<CapacityQueue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetrics {
    #[serde(default)]
    pub used_cores: f64,
    #[serde(default)]
    pub total_cores: f64,
    #[serde(default)]
    pub cores_rate: f64,
    #[serde(default)]
    pub used_mem: f64,
    #[serde(default)]
    pub total_mem: f64,
    #[serde(default)]
    pub mem_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    #[serde(default)]
    pub node_name: String,
    #[serde(default)]
    pub used_memory: f64,
    #[serde(default)]
    pub total_memory: f64,
    #[serde(default)]
    pub used_virtual_cores: f64,
    #[serde(default)]
    pub total_virtual_cores: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo {
    #[serde(default, rename = "type")]
    pub schedule_type: String,
    #[serde(default)]
    pub capacity: f64,
    #[serde(default)]
    pub used_capacity: f64,
    #[serde(default)]
    pub num_nodes: i64,
    #[serde(default)]
    pub root_queue: Option<RootQueue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootQueue {
    #[serde(default)]
    pub child_queues: Option<ChildQueues>,
}

/// The Fair scheduler reports child queues either wrapped in an object
/// (`{"queue": [...]}`) or as a bare list, depending on the cluster version.
/// Both shapes are accepted; anything else fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildQueues {
    Wrapped { queue: Vec<FairQueue> },
    List(Vec<FairQueue>),
}

impl ChildQueues {
    pub fn queues(&self) -> &[FairQueue] {
        match self {
            ChildQueues::Wrapped { queue } => queue,
            ChildQueues::List(queue) => queue,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairQueue {
    #[serde(default)]
    pub queue_name: String,
    #[serde(default)]
    pub used_resources: ResourceVector,
    #[serde(default)]
    pub max_resources: ResourceVector,
    #[serde(default)]
    pub min_resources: ResourceVector,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceVector {
    #[serde(default)]
    pub memory: i64,
    #[serde(default)]
    pub v_cores: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityQueue {
    #[serde(default)]
    pub queue_name: String,
    #[serde(default)]
    pub used_capacity: f64,
    #[serde(default)]
    pub capacity: f64,
    #[serde(default)]
    pub max_capacity: f64,
    #[serde(default)]
    pub users: Vec<QueueUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub resources_used: ResourceVector,
    #[serde(default)]
    pub num_active_applications: i64,
    #[serde(default)]
    pub num_pending_applications: i64,
}

// --- Scheduler type ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleType {
    Capacity,
    Fair,
    Fifo,
}

impl ScheduleType {
    /// `None` for wire strings outside the known set; callers degrade to an
    /// empty queue list and column set rather than erroring.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Capacity" => Some(ScheduleType::Capacity),
            "Fair" => Some(ScheduleType::Fair),
            "FIFO" => Some(ScheduleType::Fifo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleType::Capacity => "Capacity",
            ScheduleType::Fair => "Fair",
            ScheduleType::Fifo => "FIFO",
        }
    }
}

// --- Normalized queue records ---

/// Flat queue record for tabular display, one variant per scheduler type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueueRecord {
    Capacity(CapacityQueue),
    Fair(FairQueue),
    Fifo(FifoQueue),
}

/// The FIFO scheduler has no queue list; its single pseudo-queue is copied
/// out of the top-level schedule info.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FifoQueue {
    pub capacity: f64,
    pub used_capacity: f64,
    pub num_nodes: i64,
}

/// Maps the scheduler-specific queue payload into a flat ordered sequence of
/// queue records. Absent or unrecognized scheduler info yields an empty
/// sequence.
pub fn normalize_queues(data: &ClusterResource) -> Vec<QueueRecord> {
    let Some(info) = &data.schedule_info else {
        return Vec::new();
    };
    match ScheduleType::parse(&info.schedule_type) {
        Some(ScheduleType::Capacity) => data
            .queues
            .iter()
            .cloned()
            .map(QueueRecord::Capacity)
            .collect(),
        Some(ScheduleType::Fair) => info
            .root_queue
            .as_ref()
            .and_then(|r| r.child_queues.as_ref())
            .map(|c| c.queues().iter().cloned().map(QueueRecord::Fair).collect())
            .unwrap_or_default(),
        Some(ScheduleType::Fifo) => vec![QueueRecord::Fifo(FifoQueue {
            capacity: info.capacity,
            used_capacity: info.used_capacity,
            num_nodes: info.num_nodes,
        })],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fair_queue(name: &str) -> FairQueue {
        FairQueue {
            queue_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn envelope_decodes_with_missing_data() {
        let resp: ApiResponse<ClusterResource> =
            serde_json::from_value(json!({"code": 1})).unwrap();
        assert_eq!(resp.code, 1);
        assert!(resp.data.is_none());
    }

    #[test]
    fn snapshot_subfields_default_when_absent() {
        let data: ClusterResource = serde_json::from_value(json!({})).unwrap();
        assert!(data.nodes.is_empty());
        assert!(data.resource_metrics.is_none());
        assert!(data.schedule_info.is_none());
        assert!(data.queues.is_empty());
    }

    #[test]
    fn child_queues_decodes_wrapped_shape() {
        let root: RootQueue = serde_json::from_value(json!({
            "childQueues": {"queue": [{"queueName": "a"}, {"queueName": "b"}]}
        }))
        .unwrap();
        let queues = root.child_queues.unwrap();
        assert_eq!(queues.queues(), &[fair_queue("a"), fair_queue("b")]);
    }

    #[test]
    fn child_queues_decodes_bare_list_shape() {
        let root: RootQueue = serde_json::from_value(json!({
            "childQueues": [{"queueName": "a"}, {"queueName": "b"}]
        }))
        .unwrap();
        let queues = root.child_queues.unwrap();
        assert_eq!(queues.queues(), &[fair_queue("a"), fair_queue("b")]);
    }

    #[test]
    fn normalize_capacity_uses_queue_list_verbatim() {
        let data: ClusterResource = serde_json::from_value(json!({
            "scheduleInfo": {"type": "Capacity"},
            "queues": [
                {"queueName": "default", "usedCapacity": 10.0, "capacity": 20.0, "maxCapacity": 50.0},
                {"queueName": "batch"}
            ]
        }))
        .unwrap();
        let records = normalize_queues(&data);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], QueueRecord::Capacity(data.queues[0].clone()));
        assert_eq!(records[1], QueueRecord::Capacity(data.queues[1].clone()));
    }

    #[test]
    fn normalize_capacity_without_queues_is_empty() {
        let data: ClusterResource =
            serde_json::from_value(json!({"scheduleInfo": {"type": "Capacity"}})).unwrap();
        assert!(normalize_queues(&data).is_empty());
    }

    #[test]
    fn normalize_fair_accepts_both_child_shapes() {
        for child_queues in [
            json!({"queue": [{"queueName": "a"}, {"queueName": "b"}]}),
            json!([{"queueName": "a"}, {"queueName": "b"}]),
        ] {
            let data: ClusterResource = serde_json::from_value(json!({
                "scheduleInfo": {"type": "Fair", "rootQueue": {"childQueues": child_queues}}
            }))
            .unwrap();
            let records = normalize_queues(&data);
            assert_eq!(
                records,
                vec![
                    QueueRecord::Fair(fair_queue("a")),
                    QueueRecord::Fair(fair_queue("b")),
                ]
            );
        }
    }

    #[test]
    fn normalize_fair_without_root_queue_is_empty() {
        let data: ClusterResource =
            serde_json::from_value(json!({"scheduleInfo": {"type": "Fair"}})).unwrap();
        assert!(normalize_queues(&data).is_empty());
    }

    #[test]
    fn normalize_fifo_synthesizes_single_record() {
        let data: ClusterResource = serde_json::from_value(json!({
            "scheduleInfo": {"type": "FIFO", "capacity": 100.0, "usedCapacity": 35.0, "numNodes": 4}
        }))
        .unwrap();
        let records = normalize_queues(&data);
        assert_eq!(
            records,
            vec![QueueRecord::Fifo(FifoQueue {
                capacity: 100.0,
                used_capacity: 35.0,
                num_nodes: 4,
            })]
        );
    }

    #[test]
    fn normalize_unknown_type_is_empty() {
        let data: ClusterResource = serde_json::from_value(json!({
            "scheduleInfo": {"type": "Gang"},
            "queues": [{"queueName": "default"}]
        }))
        .unwrap();
        assert!(normalize_queues(&data).is_empty());
    }

    #[test]
    fn normalize_without_schedule_info_is_empty() {
        let data: ClusterResource =
            serde_json::from_value(json!({"queues": [{"queueName": "default"}]})).unwrap();
        assert!(normalize_queues(&data).is_empty());
    }

    #[test]
    fn schedule_type_round_trips_known_names() {
        for t in [ScheduleType::Capacity, ScheduleType::Fair, ScheduleType::Fifo] {
            assert_eq!(ScheduleType::parse(t.as_str()), Some(t));
        }
        assert_eq!(ScheduleType::parse("DRF"), None);
    }

    #[test]
    fn queue_record_serializes_flat() {
        let record = QueueRecord::Fifo(FifoQueue {
            capacity: 100.0,
            used_capacity: 35.0,
            num_nodes: 4,
        });
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"capacity": 100.0, "usedCapacity": 35.0, "numNodes": 4})
        );
    }
}
