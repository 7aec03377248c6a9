use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DashboardService;
use crate::models::{ApiResponse, ErrorCode, dashboard::responses::DashboardResponse};

const UPCOMING_EVENT_LIMIT: u64 = 5;

pub async fn overview(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let counts = async {
        let total_students = storage.count_students().await?;
        let total_teachers = storage.count_teachers().await?;
        let total_classes = storage.count_classes().await?;
        let total_subjects = storage.count_subjects().await?;
        let upcoming_events = storage.list_upcoming_events(UPCOMING_EVENT_LIMIT).await?;
        Ok::<_, crate::errors::EduSystemError>(DashboardResponse {
            total_students,
            total_teachers,
            total_classes,
            total_subjects,
            upcoming_events,
        })
    }
    .await;

    match counts {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Dashboard retrieved successfully",
        ))),
        Err(e) => {
            let msg = format!("Dashboard aggregation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
