use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EventService;
use crate::models::{ApiResponse, ErrorCode, events::requests::CreateEventRequest};

pub async fn create_event(
    service: &EventService,
    event_data: CreateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if event_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Event title must not be empty",
        )));
    }

    if event_data.end_time <= event_data.start_time {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Event end time must be after start time",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_event(event_data).await {
        Ok(event) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(event, "Event created successfully"))),
        Err(e) => {
            let msg = format!("Event creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
