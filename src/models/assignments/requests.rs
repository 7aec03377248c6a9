use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 作业查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub search: Option<String>,
}

// 作业创建请求，teacher_id 取自会话
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub subject_id: i64,
    pub class_id: i64,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 作业更新请求（PATCH 语义，缺省字段不变）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject_id: Option<i64>,
    pub class_id: Option<i64>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 学生提交作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmitAssignmentRequest {
    pub content: String,
}
