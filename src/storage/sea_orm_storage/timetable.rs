use super::SeaOrmStorage;
use crate::entity::timetable_entries::{ActiveModel, Column, Entity as TimetableEntries};
use crate::errors::{EduSystemError, Result};
use crate::models::timetable::{
    entities::TimetableEntry,
    requests::{CreateTimetableEntryRequest, TimetableListParams, UpdateTimetableEntryRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程表条目
    pub async fn create_timetable_entry_impl(
        &self,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            day_of_week: Set(req.day_of_week),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建课程表条目失败: {e}")))?;

        Ok(result.into_entry())
    }

    /// 列出课程表条目（按星期、开始时间排序）
    pub async fn list_timetable_entries_impl(
        &self,
        params: TimetableListParams,
    ) -> Result<Vec<TimetableEntry>> {
        let mut select = TimetableEntries::find();

        if let Some(class_id) = params.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(day_of_week) = params.day_of_week {
            select = select.filter(Column::DayOfWeek.eq(day_of_week));
        }

        let entries = select
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询课程表失败: {e}")))?;

        Ok(entries.into_iter().map(|m| m.into_entry()).collect())
    }

    /// 更新课程表条目
    pub async fn update_timetable_entry_impl(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>> {
        let existing = TimetableEntries::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询课程表条目失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }

        if let Some(day_of_week) = update.day_of_week {
            model.day_of_week = Set(day_of_week);
        }

        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新课程表条目失败: {e}")))?;

        Ok(Some(updated.into_entry()))
    }

    /// 删除课程表条目
    pub async fn delete_timetable_entry_impl(&self, id: i64) -> Result<bool> {
        let result = TimetableEntries::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除课程表条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
