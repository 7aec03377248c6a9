use super::entities::AttendanceStatus;
use serde::Deserialize;
use ts_rs::TS;

// 创建考勤场次请求，created_by 取自会话
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateAttendanceSessionRequest {
    pub class_id: i64,
    // 日期，格式 YYYY-MM-DD
    pub session_date: String,
}

// 考勤场次查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSessionListParams {
    pub class_id: Option<i64>,
}

// 单个学生的点名结果
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

// 批量点名请求：整场考勤的记录一次写入（覆盖语义）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceRequest {
    pub records: Vec<MarkAttendanceEntry>,
}
