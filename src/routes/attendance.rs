use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceSessionListParams, CreateAttendanceSessionRequest, MarkAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn create_session(
    req: HttpRequest,
    session_data: web::Json<CreateAttendanceSessionRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .create_session(session_data.into_inner(), &req)
        .await
}

pub async fn list_sessions(
    req: HttpRequest,
    query: web::Query<AttendanceSessionListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_sessions(query.into_inner(), &req)
        .await
}

pub async fn mark_attendance(
    req: HttpRequest,
    session_id: SafeIDI64,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(session_id.0, mark_data.into_inner(), &req)
        .await
}

pub async fn list_records(req: HttpRequest, session_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_records(session_id.0, &req).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("/sessions", web::post().to(create_session))
                    .route("/sessions", web::get().to(list_sessions))
                    .route("/sessions/{id}/records", web::put().to(mark_attendance))
                    .route("/sessions/{id}/records", web::get().to(list_records)),
            ),
    );
}
