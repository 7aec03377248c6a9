use super::SeaOrmStorage;
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    events::{
        entities::Event,
        requests::{CreateEventRequest, EventListParams, UpdateEventRequest},
        responses::EventListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建事件
    pub async fn create_event_impl(&self, req: CreateEventRequest) -> Result<Event> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建事件失败: {e}")))?;

        Ok(result.into_event())
    }

    /// 通过 ID 获取事件
    pub async fn get_event_by_id_impl(&self, id: i64) -> Result<Option<Event>> {
        let result = Events::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询事件失败: {e}")))?;

        Ok(result.map(|m| m.into_event()))
    }

    /// 分页列出事件
    pub async fn list_events_with_pagination_impl(
        &self,
        params: EventListParams,
    ) -> Result<EventListResponse> {
        let page = params.pagination.page.max(1) as u64;
        let size = params.pagination.size.clamp(1, 100) as u64;

        let mut select = Events::find();

        if params.upcoming {
            let now = chrono::Utc::now().timestamp();
            select = select.filter(Column::EndTime.gte(now));
        }

        select = select.order_by_asc(Column::StartTime);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询事件总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询事件页数失败: {e}")))?;

        let events = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询事件列表失败: {e}")))?;

        Ok(EventListResponse {
            items: events.into_iter().map(|m| m.into_event()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新事件
    pub async fn update_event_impl(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        let existing = self.get_event_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新事件失败: {e}")))?;

        self.get_event_by_id_impl(id).await
    }

    /// 删除事件
    pub async fn delete_event_impl(&self, id: i64) -> Result<bool> {
        let result = Events::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除事件失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 即将开始的事件（仪表盘用）
    pub async fn list_upcoming_events_impl(&self, limit: u64) -> Result<Vec<Event>> {
        let now = chrono::Utc::now().timestamp();

        let events = Events::find()
            .filter(Column::EndTime.gte(now))
            .order_by_asc(Column::StartTime)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询事件列表失败: {e}")))?;

        Ok(events.into_iter().map(|m| m.into_event()).collect())
    }
}
