use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::events::entities::Event;

// 管理端仪表盘聚合响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardResponse {
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_classes: u64,
    pub total_subjects: u64,
    pub upcoming_events: Vec<Event>,
}
