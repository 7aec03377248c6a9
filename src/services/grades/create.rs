use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, grades::requests::CreateGradeRequest};

pub async fn create_grade(
    service: &GradeService,
    grade_data: CreateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if grade_data.max_score <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Max score must be positive",
        )));
    }

    if grade_data.score < 0.0 || grade_data.score > grade_data.max_score {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Score must be between 0 and max score",
        )));
    }

    let storage = service.get_storage(request);

    // 学生与科目必须存在
    match storage.get_student_by_id(grade_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student does not exist",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check student: {e}"),
                )),
            );
        }
    }

    match storage.get_subject_by_id(grade_data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject does not exist",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check subject: {e}"),
                )),
            );
        }
    }

    // 录入人取当前会话的教师档案，管理员直接录入时为空
    let graded_by = match RequireJWT::extract_user_id(request) {
        Some(user_id) => match storage.get_teacher_by_user_id(user_id).await {
            Ok(teacher) => teacher.map(|t| t.id),
            Err(_) => None,
        },
        None => None,
    };

    match storage.create_grade(grade_data, graded_by).await {
        Ok(grade) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(grade, "Grade recorded successfully"))),
        Err(e) => {
            let msg = format!("Grade creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
