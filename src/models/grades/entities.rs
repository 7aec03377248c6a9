use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    // 关联作业，可为空（如期末考试成绩）
    pub assignment_id: Option<i64>,
    pub score: f64,
    pub max_score: f64,
    pub term: Option<String>,
    pub remark: Option<String>,
    // 录入成绩的教师
    pub graded_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
