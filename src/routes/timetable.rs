use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::timetable::requests::{
    CreateTimetableEntryRequest, TimetableListParams, UpdateTimetableEntryRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TimetableService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TimetableService 实例
static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

// HTTP处理程序
pub async fn list_entries(
    req: HttpRequest,
    query: web::Query<TimetableListParams>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_entries(query.into_inner(), &req).await
}

pub async fn create_entry(
    req: HttpRequest,
    entry_data: web::Json<CreateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .create_entry(entry_data.into_inner(), &req)
        .await
}

pub async fn update_entry(
    req: HttpRequest,
    entry_id: SafeIDI64,
    update_data: web::Json<UpdateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .update_entry(entry_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_entry(req: HttpRequest, entry_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.delete_entry(entry_id.0, &req).await
}

// 学生端处理程序
pub async fn list_my_entries(
    req: HttpRequest,
    query: web::Query<TimetableListParams>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .list_entries_for_student(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin/timetable")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_entries))
                    .route("", web::post().to(create_entry))
                    .route("/{id}", web::put().to(update_entry))
                    .route("/{id}", web::delete().to(delete_entry)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/student/timetable")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::get().to(list_my_entries)),
            ),
    );
}
