use super::SeaOrmStorage;
use crate::entity::students::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Students,
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as Users,
};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentItem},
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::entities::{UserRole, UserStatus},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生：账号行与档案行在同一事务中写入
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<StudentItem> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let user = UserActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(UserRole::Student.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            avatar_url: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EduSystemError::database_operation(format!("创建学生账号失败: {e}")))?;

        let student = StudentActiveModel {
            user_id: Set(user.id),
            class_id: Set(req.class_id),
            guardian_name: Set(req.guardian_name),
            guardian_phone: Set(req.guardian_phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EduSystemError::database_operation(format!("创建学生档案失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(StudentItem {
            student: student.into_student(),
            user: user.into_user(),
        })
    }

    /// 通过 ID 获取学生档案（含账号信息）
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<StudentItem>> {
        let result = Students::find_by_id(id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.and_then(|(student, user)| {
            user.map(|user| StudentItem {
                student: student.into_student(),
                user: user.into_user(),
            })
        }))
    }

    /// 通过用户 ID 获取学生档案
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(StudentColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        params: StudentListParams,
    ) -> Result<StudentListResponse> {
        let page = params.pagination.page.max(1) as u64;
        let size = params.pagination.size.clamp(1, 100) as u64;

        let mut select = Students::find().find_also_related(Users);

        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(UserColumn::Username.contains(&escaped))
                    .add(UserColumn::Email.contains(&escaped))
                    .add(UserColumn::DisplayName.contains(&escaped)),
            );
        }

        if let Some(class_id) = params.class_id {
            select = select.filter(StudentColumn::ClassId.eq(class_id));
        }

        select = select.order_by_desc(StudentColumn::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students
                .into_iter()
                .filter_map(|(student, user)| {
                    user.map(|user| StudentItem {
                        student: student.into_student(),
                        user: user.into_user(),
                    })
                })
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生档案（档案字段与账号字段跨两行，同一事务）
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentItem>> {
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let mut student_model = StudentActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(class_id) = update.class_id {
            student_model.class_id = Set(Some(class_id));
        }
        if let Some(guardian_name) = update.guardian_name {
            student_model.guardian_name = Set(Some(guardian_name));
        }
        if let Some(guardian_phone) = update.guardian_phone {
            student_model.guardian_phone = Set(Some(guardian_phone));
        }
        student_model
            .update(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新学生档案失败: {e}")))?;

        if update.email.is_some() || update.display_name.is_some() {
            let mut user_model = UserActiveModel {
                id: Set(existing.user_id),
                updated_at: Set(now),
                ..Default::default()
            };
            if let Some(email) = update.email {
                user_model.email = Set(email);
            }
            if let Some(display_name) = update.display_name {
                user_model.display_name = Set(Some(display_name));
            }
            user_model
                .update(&txn)
                .await
                .map_err(|e| {
                    EduSystemError::database_operation(format!("更新学生账号失败: {e}"))
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生：档案行与账号行在同一事务中删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let student = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(student) = student else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除学生档案失败: {e}")))?;

        Users::delete_by_id(student.user_id)
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除学生账号失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("统计学生数量失败: {e}")))?;

        Ok(count)
    }
}
