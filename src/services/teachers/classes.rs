use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{
        entities::ClassReassignment,
        requests::ReassignClassesRequest,
        responses::{ClassReassignConflictResponse, TeacherClassesResponse},
    },
};

pub async fn get_teacher_classes(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 教师必须存在
    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get teacher: {e}"),
                )),
            );
        }
    }

    match storage.get_teacher_classes(teacher_id).await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherClassesResponse { classes },
            "Classes retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get classes: {e}"),
            )),
        ),
    }
}

/// 当前登录教师名下的班级
pub async fn my_classes(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match crate::middlewares::RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let teacher = match storage.get_teacher_by_user_id(user_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "No teacher profile linked to the current user",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to resolve teacher profile: {e}"),
                )),
            );
        }
    };

    match storage.get_teacher_classes(teacher.id).await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherClassesResponse { classes },
            "Classes retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get classes: {e}"),
            )),
        ),
    }
}

/// 班级重新指派
///
/// class_ids 为教师应当拥有的完整集合。任何一个班级已属于其他教师时
/// 整个请求以 409 失败并返回冲突班级，数据库不发生任何写入，
/// 前端用返回的列表取消勾选后重试。
pub async fn reassign_classes(
    service: &TeacherService,
    teacher_id: i64,
    reassign_data: ReassignClassesRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 教师必须存在
    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get teacher: {e}"),
                )),
            );
        }
    }

    match storage
        .reassign_teacher_classes(teacher_id, reassign_data.class_ids)
        .await
    {
        Ok(ClassReassignment::Reassigned(classes)) => {
            info!(
                "Teacher {} now owns {} class(es)",
                teacher_id,
                classes.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TeacherClassesResponse { classes },
                "Classes reassigned successfully",
            )))
        }
        Ok(ClassReassignment::Conflict(conflicts)) => {
            info!(
                "Class reassignment for teacher {} rejected: {} class(es) owned by another teacher",
                teacher_id,
                conflicts.len()
            );
            Ok(HttpResponse::Conflict().json(ApiResponse::error(
                ErrorCode::ClassReassignConflict,
                ClassReassignConflictResponse { conflicts },
                "Some classes are already assigned to another teacher",
            )))
        }
        Err(e) => {
            let msg = format!("Class reassignment failed: {e}");
            error!("{}", msg);
            if matches!(e, crate::errors::EduSystemError::NotFound(_)) {
                Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    e.message(),
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
