use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::MarkAttendanceRequest, responses::AttendanceRecordListResponse},
};

/// 批量点名：整场记录覆盖写入
pub async fn mark_attendance(
    service: &AttendanceService,
    session_id: i64,
    mark_data: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 场次必须存在
    match storage.get_attendance_session_by_id(session_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AttendanceSessionNotFound,
                "Attendance session not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get attendance session: {e}"),
                )),
            );
        }
    }

    // 同一学生在一份点名单里只能出现一次
    let mut seen = std::collections::HashSet::new();
    for entry in &mark_data.records {
        if !seen.insert(entry.student_id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Duplicate student {} in attendance records", entry.student_id),
            )));
        }
    }

    match storage.mark_attendance(session_id, mark_data.records).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceRecordListResponse { items },
            "Attendance marked successfully",
        ))),
        Err(e) => {
            let msg = format!("Attendance marking failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn list_records(
    service: &AttendanceService,
    session_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 场次必须存在
    match storage.get_attendance_session_by_id(session_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AttendanceSessionNotFound,
                "Attendance session not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get attendance session: {e}"),
                )),
            );
        }
    }

    match storage.list_attendance_records(session_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceRecordListResponse { items },
            "Attendance records retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list attendance records: {e}"),
            )),
        ),
    }
}
