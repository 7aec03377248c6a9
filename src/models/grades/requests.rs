use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 成绩查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub term: Option<String>,
}

// 成绩录入请求，graded_by 取自会话
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub assignment_id: Option<i64>,
    pub score: f64,
    pub max_score: f64,
    pub term: Option<String>,
    pub remark: Option<String>,
}

// 成绩更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub term: Option<String>,
    pub remark: Option<String>,
}
