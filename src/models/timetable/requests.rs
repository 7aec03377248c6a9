use serde::Deserialize;
use ts_rs::TS;

// 课程表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableListParams {
    pub class_id: Option<i64>,
    pub day_of_week: Option<i32>,
}

// 课程表条目创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimetableEntryRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: Option<i64>,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
}

// 课程表条目更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct UpdateTimetableEntryRequest {
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub day_of_week: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
