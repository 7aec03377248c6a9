use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode, timetable::requests::UpdateTimetableEntryRequest};

pub async fn update_entry(
    service: &TimetableService,
    entry_id: i64,
    update_data: UpdateTimetableEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(day_of_week) = update_data.day_of_week
        && !(0..=6).contains(&day_of_week)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Day of week must be between 0 and 6",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_timetable_entry(entry_id, update_data).await {
        Ok(Some(entry)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Timetable entry updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableEntryNotFound,
            "Timetable entry not found",
        ))),
        Err(e) => {
            let msg = format!("Timetable entry update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
