use super::SeaOrmStorage;
use crate::entity::attendance_records::{
    ActiveModel as RecordActiveModel, Column as RecordColumn, Entity as AttendanceRecords,
};
use crate::entity::attendance_sessions::{
    ActiveModel as SessionActiveModel, Column as SessionColumn, Entity as AttendanceSessions,
};
use crate::errors::{EduSystemError, Result};
use crate::models::attendance::{
    entities::{AttendanceRecord, AttendanceSession},
    requests::{CreateAttendanceSessionRequest, MarkAttendanceEntry},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建考勤场次
    pub async fn create_attendance_session_impl(
        &self,
        req: CreateAttendanceSessionRequest,
        created_by: i64,
    ) -> Result<AttendanceSession> {
        let now = chrono::Utc::now().timestamp();

        let model = SessionActiveModel {
            class_id: Set(req.class_id),
            session_date: Set(req.session_date),
            created_by: Set(created_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建考勤场次失败: {e}")))?;

        Ok(result.into_session())
    }

    /// 通过 ID 获取考勤场次
    pub async fn get_attendance_session_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<AttendanceSession>> {
        let result = AttendanceSessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询考勤场次失败: {e}")))?;

        Ok(result.map(|m| m.into_session()))
    }

    /// 列出考勤场次（可按班级过滤）
    pub async fn list_attendance_sessions_impl(
        &self,
        class_id: Option<i64>,
    ) -> Result<Vec<AttendanceSession>> {
        let mut select = AttendanceSessions::find();

        if let Some(class_id) = class_id {
            select = select.filter(SessionColumn::ClassId.eq(class_id));
        }

        let sessions = select
            .order_by_desc(SessionColumn::SessionDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("查询考勤场次列表失败: {e}"))
            })?;

        Ok(sessions.into_iter().map(|m| m.into_session()).collect())
    }

    /// 批量点名
    ///
    /// 覆盖语义：同一事务内先清空该场次的旧记录，再写入新记录，
    /// 重复点名不会产生一名学生两条记录。
    pub async fn mark_attendance_impl(
        &self,
        session_id: i64,
        entries: Vec<MarkAttendanceEntry>,
    ) -> Result<Vec<AttendanceRecord>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        AttendanceRecords::delete_many()
            .filter(RecordColumn::SessionId.eq(session_id))
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("清除旧考勤记录失败: {e}")))?;

        for entry in &entries {
            let model = RecordActiveModel {
                session_id: Set(session_id),
                student_id: Set(entry.student_id),
                status: Set(entry.status.to_string()),
                created_at: Set(now),
                ..Default::default()
            };
            model
                .insert(&txn)
                .await
                .map_err(|e| {
                    EduSystemError::database_operation(format!("写入考勤记录失败: {e}"))
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        self.list_attendance_records_impl(session_id).await
    }

    /// 列出某场考勤的记录
    pub async fn list_attendance_records_impl(
        &self,
        session_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let records = AttendanceRecords::find()
            .filter(RecordColumn::SessionId.eq(session_id))
            .order_by_asc(RecordColumn::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("查询考勤记录列表失败: {e}"))
            })?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }
}
