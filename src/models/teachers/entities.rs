use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::User;

// 教师档案实体（与用户一对一）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师档案 + 账号信息，列表/详情用
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherItem {
    pub teacher: Teacher,
    pub user: User,
}

// 班级重新指派的存储层结果
//
// Conflict 时不发生任何写入，携带被其他教师占用的班级，
// 供上层返回 409 让前端取消勾选。
#[derive(Debug)]
pub enum ClassReassignment {
    Reassigned(Vec<crate::models::classes::entities::Class>),
    Conflict(Vec<crate::models::classes::entities::Class>),
}
