use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Event;
use crate::models::common::PaginationInfo;

// 事件列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventListResponse {
    pub items: Vec<Event>,
    pub pagination: PaginationInfo,
}
