use crate::models::yarn::ScheduleType;

/// One table column: localized header plus the wire field it reads.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub key: &'static str,
}

pub const NODE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { title: "节点名称", key: "nodeName" },
    ColumnSpec { title: "已使用内存（MB）", key: "usedMemory" },
    ColumnSpec { title: "总内存（MB）", key: "totalMemory" },
    ColumnSpec { title: "已使用核数", key: "usedVirtualCores" },
    ColumnSpec { title: "总核数", key: "totalVirtualCores" },
];

pub const RESOURCE_DETAIL_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { title: "用户名", key: "username" },
    ColumnSpec { title: "已使用资源", key: "resourcesUsed" },
    ColumnSpec { title: "运行中任务数", key: "numActiveApplications" },
    ColumnSpec { title: "等待中任务数", key: "numPendingApplications" },
];

const CAPACITY_QUEUE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { title: "资源队列", key: "queueName" },
    ColumnSpec { title: "已使用容量", key: "usedCapacity" },
    ColumnSpec { title: "分配容量", key: "capacity" },
    ColumnSpec { title: "最大容量", key: "maxCapacity" },
    ColumnSpec { title: "查看", key: "action" },
];

const FAIR_QUEUE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { title: "资源队列", key: "queueName" },
    ColumnSpec { title: "已使资源数", key: "usedResources" },
    ColumnSpec { title: "最大资源数", key: "maxResources" },
    ColumnSpec { title: "最小资源数", key: "minResources" },
];

const FIFO_QUEUE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { title: "容量", key: "capacity" },
    ColumnSpec { title: "已使用容量", key: "usedCapacity" },
    ColumnSpec { title: "节点数量", key: "numNodes" },
];

/// Column set for the queue table. Static slices, so the mapping is computed
/// once and switching only follows the scheduler type.
pub fn queue_columns(schedule_type: Option<ScheduleType>) -> &'static [ColumnSpec] {
    match schedule_type {
        Some(ScheduleType::Capacity) => CAPACITY_QUEUE_COLUMNS,
        Some(ScheduleType::Fair) => FAIR_QUEUE_COLUMNS,
        Some(ScheduleType::Fifo) => FIFO_QUEUE_COLUMNS,
        None => &[],
    }
}

// --- Render models ---

#[derive(Debug, Clone)]
pub struct CardView {
    pub kind: &'static str,
    pub title: &'static str,
    pub used: String,
    pub total: String,
    pub rate: String,
}

#[derive(Debug, Clone)]
pub struct RowView {
    pub key: String,
    pub cells: Vec<String>,
    /// Toggled drill-down link, present on Capacity queue rows only.
    pub detail_href: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TableView {
    pub title: String,
    pub desc: String,
    pub columns: &'static [ColumnSpec],
    pub rows: Vec<RowView>,
}
