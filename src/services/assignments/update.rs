use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AssignmentService, current_teacher};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{entities::Assignment, requests::UpdateAssignmentRequest},
    users::entities::UserRole,
};

pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    update_data: UpdateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get assignment: {e}"),
                )),
            );
        }
    };

    // 权限校验：教师只能修改自己布置的作业
    if let Err(resp) = check_assignment_permission(service, &assignment, request).await {
        return Ok(resp);
    }

    match storage.update_assignment(assignment_id, update_data).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => {
            let msg = format!("Assignment update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

/// 权限校验辅助函数：管理员放行，教师要求作业归属自己
pub(crate) async fn check_assignment_permission(
    service: &AssignmentService,
    assignment: &Assignment,
    request: &HttpRequest,
) -> Result<(), HttpResponse> {
    if RequireJWT::extract_user_role(request) == Some(UserRole::Admin) {
        return Ok(());
    }

    let storage = service.get_storage(request);
    let teacher = current_teacher(&storage, request).await?;

    if assignment.teacher_id != teacher.id {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AssignmentPermissionDenied,
            "You do not have permission to modify another teacher's assignment",
        )));
    }

    Ok(())
}
