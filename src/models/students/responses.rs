use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::StudentItem;
use crate::models::common::PaginationInfo;

// 学生详情响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub item: StudentItem,
}

// 学生列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<StudentItem>,
    pub pagination: PaginationInfo,
}
