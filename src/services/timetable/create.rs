use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode, timetable::requests::CreateTimetableEntryRequest};

fn valid_time(value: &str) -> bool {
    chrono::NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

pub async fn create_entry(
    service: &TimetableService,
    entry_data: CreateTimetableEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !(0..=6).contains(&entry_data.day_of_week) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Day of week must be between 0 and 6",
        )));
    }

    if !valid_time(&entry_data.start_time) || !valid_time(&entry_data.end_time) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Times must be in HH:MM format",
        )));
    }

    if entry_data.end_time <= entry_data.start_time {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "End time must be after start time",
        )));
    }

    let storage = service.get_storage(request);

    // 班级与科目必须存在
    match storage.get_class_by_id(entry_data.class_id).await {
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

    match storage.get_subject_by_id(entry_data.subject_id).await {
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

    match storage.create_timetable_entry(entry_data).await {
        Ok(entry) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Timetable entry created successfully",
        ))),
        Err(e) => {
            let msg = format!("Timetable entry creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
