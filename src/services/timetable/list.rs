use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    timetable::{requests::TimetableListParams, responses::TimetableListResponse},
};

pub async fn list_entries(
    service: &TimetableService,
    params: TimetableListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_timetable_entries(params).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TimetableListResponse { items },
            "Timetable retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list timetable: {e}"),
            )),
        ),
    }
}

/// 学生视角的课程表：班级锁定为本班
pub async fn list_entries_for_student(
    service: &TimetableService,
    mut params: TimetableListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let student = match storage.get_student_by_user_id(user_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "No student profile linked to the current user",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to resolve student profile: {e}"),
                )),
            );
        }
    };

    // 未分班的学生没有课程表
    let Some(class_id) = student.class_id else {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            TimetableListResponse { items: vec![] },
            "Timetable retrieved successfully",
        )));
    };

    params.class_id = Some(class_id);

    match storage.list_timetable_entries(params).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TimetableListResponse { items },
            "Timetable retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list timetable: {e}"),
            )),
        ),
    }
}
