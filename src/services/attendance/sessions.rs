use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{
        requests::{AttendanceSessionListParams, CreateAttendanceSessionRequest},
        responses::AttendanceSessionListResponse,
    },
};

pub async fn create_session(
    service: &AttendanceService,
    session_data: CreateAttendanceSessionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 日期必须是合法的 YYYY-MM-DD
    if chrono::NaiveDate::parse_from_str(&session_data.session_date, "%Y-%m-%d").is_err() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Session date must be in YYYY-MM-DD format",
        )));
    }

    let storage = service.get_storage(request);

    // 班级必须存在
    match storage.get_class_by_id(session_data.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class does not exist",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check class: {e}"),
                )),
            );
        }
    }

    // 点名发起人取当前会话的教师档案
    let created_by = match RequireJWT::extract_user_id(request) {
        Some(user_id) => match storage.get_teacher_by_user_id(user_id).await {
            Ok(Some(teacher)) => teacher.id,
            Ok(None) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "No teacher profile linked to the current user",
                )));
            }
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to resolve teacher profile: {e}"),
                    ),
                ));
            }
        },
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    match storage
        .create_attendance_session(session_data, created_by)
        .await
    {
        Ok(session) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            session,
            "Attendance session created successfully",
        ))),
        Err(e) => {
            let msg = format!("Attendance session creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn list_sessions(
    service: &AttendanceService,
    params: AttendanceSessionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attendance_sessions(params.class_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceSessionListResponse { items },
            "Attendance sessions retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list attendance sessions: {e}"),
            )),
        ),
    }
}
