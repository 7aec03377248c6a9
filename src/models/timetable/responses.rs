use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::TimetableEntry;

// 课程表响应，整表返回不分页
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableListResponse {
    pub items: Vec<TimetableEntry>,
}
