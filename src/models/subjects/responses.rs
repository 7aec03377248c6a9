use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Subject;
use crate::models::common::PaginationInfo;

// 科目列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
    pub pagination: PaginationInfo,
}
