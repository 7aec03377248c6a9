pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::timetable::requests::{
    CreateTimetableEntryRequest, TimetableListParams, UpdateTimetableEntryRequest,
};
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
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

    // 课程表条目列表
    pub async fn list_entries(
        &self,
        params: TimetableListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_entries(self, params, request).await
    }

    // 学生视角的课程表（限定本班）
    pub async fn list_entries_for_student(
        &self,
        params: TimetableListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_entries_for_student(self, params, request).await
    }

    // 创建课程表条目
    pub async fn create_entry(
        &self,
        entry_data: CreateTimetableEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_entry(self, entry_data, request).await
    }

    // 更新课程表条目
    pub async fn update_entry(
        &self,
        entry_id: i64,
        update_data: UpdateTimetableEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_entry(self, entry_id, update_data, request).await
    }

    // 删除课程表条目
    pub async fn delete_entry(
        &self,
        entry_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_entry(self, entry_id, request).await
    }
}
