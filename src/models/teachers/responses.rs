use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::TeacherItem;
use crate::models::classes::entities::Class;
use crate::models::common::PaginationInfo;

// 教师详情响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub item: TeacherItem,
}

// 教师列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListResponse {
    pub items: Vec<TeacherItem>,
    pub pagination: PaginationInfo,
}

// 教师名下班级响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherClassesResponse {
    pub classes: Vec<Class>,
}

// 班级重新指派冲突响应：409 时返回被其他教师占用的班级
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct ClassReassignConflictResponse {
    pub conflicts: Vec<Class>,
}
