use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程表条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableEntry {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: Option<i64>,
    // 0 = 周日, 1 = 周一, ..., 6 = 周六
    pub day_of_week: i32,
    // 格式 HH:MM
    pub start_time: String,
    pub end_time: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
