use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{AttendanceRecord, AttendanceSession};

// 考勤场次列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSessionListResponse {
    pub items: Vec<AttendanceSession>,
}

// 考勤记录列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecordListResponse {
    pub items: Vec<AttendanceRecord>,
}
