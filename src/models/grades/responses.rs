use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Grade;
use crate::models::common::PaginationInfo;

// 成绩列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
    pub pagination: PaginationInfo,
}
