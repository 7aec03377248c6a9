pub mod records;
pub mod sessions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceSessionListParams, CreateAttendanceSessionRequest, MarkAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建考勤场次
    pub async fn create_session(
        &self,
        session_data: CreateAttendanceSessionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sessions::create_session(self, session_data, request).await
    }

    // 考勤场次列表
    pub async fn list_sessions(
        &self,
        params: AttendanceSessionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sessions::list_sessions(self, params, request).await
    }

    // 批量点名
    pub async fn mark_attendance(
        &self,
        session_id: i64,
        mark_data: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        records::mark_attendance(self, session_id, mark_data, request).await
    }

    // 某场考勤的记录列表
    pub async fn list_records(
        &self,
        session_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        records::list_records(self, session_id, request).await
    }
}
