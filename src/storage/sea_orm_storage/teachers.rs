use super::SeaOrmStorage;
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::teachers::{
    ActiveModel as TeacherActiveModel, Column as TeacherColumn, Entity as Teachers,
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as Users,
};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    classes::entities::Class,
    teachers::{
        entities::{ClassReassignment, Teacher, TeacherItem},
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::entities::{UserRole, UserStatus},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 创建教师：账号行与档案行在同一事务中写入
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<TeacherItem> {
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
            role: Set(UserRole::Teacher.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            avatar_url: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EduSystemError::database_operation(format!("创建教师账号失败: {e}")))?;

        let teacher = TeacherActiveModel {
            user_id: Set(user.id),
            phone: Set(req.phone),
            department: Set(req.department),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EduSystemError::database_operation(format!("创建教师档案失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(TeacherItem {
            teacher: teacher.into_teacher(),
            user: user.into_user(),
        })
    }

    /// 通过 ID 获取教师档案（含账号信息）
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<TeacherItem>> {
        let result = Teachers::find_by_id(id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.and_then(|(teacher, user)| {
            user.map(|user| TeacherItem {
                teacher: teacher.into_teacher(),
                user: user.into_user(),
            })
        }))
    }

    /// 通过用户 ID 获取教师档案
    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(TeacherColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        params: TeacherListParams,
    ) -> Result<TeacherListResponse> {
        let page = params.pagination.page.max(1) as u64;
        let size = params.pagination.size.clamp(1, 100) as u64;

        let mut select = Teachers::find().find_also_related(Users);

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

        if let Some(ref department) = params.department {
            select = select.filter(TeacherColumn::Department.eq(department));
        }

        select = select.order_by_desc(TeacherColumn::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers
                .into_iter()
                .filter_map(|(teacher, user)| {
                    user.map(|user| TeacherItem {
                        teacher: teacher.into_teacher(),
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

    /// 更新教师档案（档案字段与账号字段跨两行，同一事务）
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<TeacherItem>> {
        let existing = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let mut teacher_model = TeacherActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(phone) = update.phone {
            teacher_model.phone = Set(Some(phone));
        }
        if let Some(department) = update.department {
            teacher_model.department = Set(Some(department));
        }
        teacher_model
            .update(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新教师档案失败: {e}")))?;

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
                    EduSystemError::database_operation(format!("更新教师账号失败: {e}"))
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师
    ///
    /// 同一事务内：释放名下班级、删除档案行、删除账号行。
    /// 事务中途失败时两行都不删除，不留孤儿行。
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let teacher = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        let Some(teacher) = teacher else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        Classes::update_many()
            .col_expr(ClassColumn::TeacherId, Expr::value(Option::<i64>::None))
            .filter(ClassColumn::TeacherId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("释放班级失败: {e}")))?;

        Teachers::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除教师档案失败: {e}")))?;

        Users::delete_by_id(teacher.user_id)
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除教师账号失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 教师名下的班级
    pub async fn get_teacher_classes_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .filter(ClassColumn::TeacherId.eq(teacher_id))
            .order_by_asc(ClassColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 班级重新指派
    ///
    /// class_ids 为教师应当拥有的完整班级集合。被其他教师占用的班级
    /// 使整个操作失败并原样返回，不发生任何写入。
    ///
    /// 写入用条件更新锁定期望的当前归属：认领只对「无主或已属于该教师」
    /// 的行生效，受影响行数不足说明有并发指派抢先，整个事务回滚并报冲突，
    /// 而不是静默覆盖对方的结果。
    pub async fn reassign_teacher_classes_impl(
        &self,
        teacher_id: i64,
        class_ids: Vec<i64>,
    ) -> Result<ClassReassignment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        // 请求的班级必须全部存在
        let requested = Classes::find()
            .filter(ClassColumn::Id.is_in(class_ids.clone()))
            .all(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询班级失败: {e}")))?;

        if requested.len() != class_ids.len() {
            return Err(EduSystemError::not_found(
                "One or more requested classes do not exist",
            ));
        }

        // 被其他教师占用的班级 → 冲突，整个操作不落库
        let conflicts: Vec<Class> = requested
            .iter()
            .filter(|c| matches!(c.teacher_id, Some(owner) if owner != teacher_id))
            .cloned()
            .map(|m| m.into_class())
            .collect();

        if !conflicts.is_empty() {
            txn.rollback()
                .await
                .map_err(|e| EduSystemError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(ClassReassignment::Conflict(conflicts));
        }

        let now = chrono::Utc::now().timestamp();

        // 释放不在新集合中的班级，条件锁定当前归属
        Classes::update_many()
            .col_expr(ClassColumn::TeacherId, Expr::value(Option::<i64>::None))
            .col_expr(ClassColumn::UpdatedAt, Expr::value(now))
            .filter(ClassColumn::TeacherId.eq(teacher_id))
            .filter(ClassColumn::Id.is_not_in(class_ids.clone()))
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("释放班级失败: {e}")))?;

        // 认领选中的班级，条件写入保证不覆盖并发指派
        if !class_ids.is_empty() {
            let claimed = Classes::update_many()
                .col_expr(ClassColumn::TeacherId, Expr::value(teacher_id))
                .col_expr(ClassColumn::UpdatedAt, Expr::value(now))
                .filter(ClassColumn::Id.is_in(class_ids.clone()))
                .filter(
                    Condition::any()
                        .add(ClassColumn::TeacherId.is_null())
                        .add(ClassColumn::TeacherId.eq(teacher_id)),
                )
                .exec(&txn)
                .await
                .map_err(|e| EduSystemError::database_operation(format!("认领班级失败: {e}")))?;

            if claimed.rows_affected != class_ids.len() as u64 {
                txn.rollback().await.map_err(|e| {
                    EduSystemError::database_operation(format!("回滚事务失败: {e}"))
                })?;

                let current = Classes::find()
                    .filter(ClassColumn::Id.is_in(class_ids))
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        EduSystemError::database_operation(format!("查询班级失败: {e}"))
                    })?;

                let conflicts = current
                    .into_iter()
                    .filter(|c| matches!(c.teacher_id, Some(owner) if owner != teacher_id))
                    .map(|m| m.into_class())
                    .collect();

                return Ok(ClassReassignment::Conflict(conflicts));
            }
        }

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let classes = self.get_teacher_classes_impl(teacher_id).await?;
        Ok(ClassReassignment::Reassigned(classes))
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        let count = Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("统计教师数量失败: {e}")))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::requests::CreateClassRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn test_storage() -> SeaOrmStorage {
        // 内存库要锁定单连接，连接池扩容会拿到空库
        let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt)
            .await
            .expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        SeaOrmStorage::from_connection(db)
    }

    async fn seed_teacher(storage: &SeaOrmStorage, username: &str) -> TeacherItem {
        storage
            .create_teacher_impl(CreateTeacherRequest {
                username: username.to_string(),
                email: format!("{username}@school.test"),
                password: "argon2-hash-placeholder".to_string(),
                display_name: None,
                phone: None,
                department: None,
            })
            .await
            .expect("create teacher")
    }

    async fn seed_class(storage: &SeaOrmStorage, name: &str) -> Class {
        storage
            .create_class_impl(CreateClassRequest {
                class_name: name.to_string(),
                description: None,
                teacher_id: None,
            })
            .await
            .expect("create class")
    }

    #[tokio::test]
    async fn test_reassign_claims_unowned_classes() {
        let storage = test_storage().await;
        let teacher = seed_teacher(&storage, "teacher-one").await;
        let class_a = seed_class(&storage, "Class 1A").await;
        let class_b = seed_class(&storage, "Class 1B").await;

        let outcome = storage
            .reassign_teacher_classes_impl(teacher.teacher.id, vec![class_a.id, class_b.id])
            .await
            .expect("reassign");

        match outcome {
            ClassReassignment::Reassigned(classes) => {
                assert_eq!(classes.len(), 2);
                assert!(classes.iter().all(|c| c.teacher_id == Some(teacher.teacher.id)));
            }
            ClassReassignment::Conflict(_) => panic!("unexpected conflict"),
        }
    }

    #[tokio::test]
    async fn test_reassign_conflict_leaves_ownership_unchanged() {
        let storage = test_storage().await;
        let t1 = seed_teacher(&storage, "teacher-one").await;
        let t2 = seed_teacher(&storage, "teacher-two").await;
        let class_a = seed_class(&storage, "Class 1A").await;

        // t1 先拥有 Class 1A
        storage
            .reassign_teacher_classes_impl(t1.teacher.id, vec![class_a.id])
            .await
            .expect("first reassign");

        // t2 请求同一班级必须冲突
        let outcome = storage
            .reassign_teacher_classes_impl(t2.teacher.id, vec![class_a.id])
            .await
            .expect("second reassign");

        match outcome {
            ClassReassignment::Conflict(conflicts) => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].id, class_a.id);
                assert_eq!(conflicts[0].teacher_id, Some(t1.teacher.id));
            }
            ClassReassignment::Reassigned(_) => panic!("conflict expected"),
        }

        // 归属不变
        let current = storage
            .get_class_by_id_impl(class_a.id)
            .await
            .expect("get class")
            .expect("class exists");
        assert_eq!(current.teacher_id, Some(t1.teacher.id));

        // t2 名下没有班级
        let t2_classes = storage
            .get_teacher_classes_impl(t2.teacher.id)
            .await
            .expect("t2 classes");
        assert!(t2_classes.is_empty());
    }

    #[tokio::test]
    async fn test_reassign_empty_list_releases_all() {
        let storage = test_storage().await;
        let teacher = seed_teacher(&storage, "teacher-one").await;
        let class_a = seed_class(&storage, "Class 1A").await;
        let class_b = seed_class(&storage, "Class 1B").await;

        storage
            .reassign_teacher_classes_impl(teacher.teacher.id, vec![class_a.id, class_b.id])
            .await
            .expect("assign");

        let outcome = storage
            .reassign_teacher_classes_impl(teacher.teacher.id, vec![])
            .await
            .expect("release");

        match outcome {
            ClassReassignment::Reassigned(classes) => assert!(classes.is_empty()),
            ClassReassignment::Conflict(_) => panic!("unexpected conflict"),
        }

        let current = storage
            .get_class_by_id_impl(class_a.id)
            .await
            .expect("get class")
            .expect("class exists");
        assert_eq!(current.teacher_id, None);
    }

    #[tokio::test]
    async fn test_reassign_partial_conflict_mutates_nothing() {
        let storage = test_storage().await;
        let t1 = seed_teacher(&storage, "teacher-one").await;
        let t2 = seed_teacher(&storage, "teacher-two").await;
        let owned = seed_class(&storage, "Class 1A").await;
        let free = seed_class(&storage, "Class 1B").await;

        storage
            .reassign_teacher_classes_impl(t1.teacher.id, vec![owned.id])
            .await
            .expect("assign");

        // 一个冲突班级 + 一个空闲班级：空闲的也不能被认领
        let outcome = storage
            .reassign_teacher_classes_impl(t2.teacher.id, vec![owned.id, free.id])
            .await
            .expect("reassign");

        assert!(matches!(outcome, ClassReassignment::Conflict(_)));

        let free_now = storage
            .get_class_by_id_impl(free.id)
            .await
            .expect("get class")
            .expect("class exists");
        assert_eq!(free_now.teacher_id, None);
    }

    #[tokio::test]
    async fn test_delete_teacher_removes_profile_and_user() {
        let storage = test_storage().await;
        let teacher = seed_teacher(&storage, "teacher-one").await;
        let class_a = seed_class(&storage, "Class 1A").await;

        storage
            .reassign_teacher_classes_impl(teacher.teacher.id, vec![class_a.id])
            .await
            .expect("assign");

        let deleted = storage
            .delete_teacher_impl(teacher.teacher.id)
            .await
            .expect("delete");
        assert!(deleted);

        // 档案行与账号行都不在了
        assert!(
            storage
                .get_teacher_by_id_impl(teacher.teacher.id)
                .await
                .expect("query teacher")
                .is_none()
        );
        assert!(
            storage
                .get_user_by_id_impl(teacher.user.id)
                .await
                .expect("query user")
                .is_none()
        );

        // 名下班级被释放而不是被级联删除
        let class_now = storage
            .get_class_by_id_impl(class_a.id)
            .await
            .expect("get class")
            .expect("class exists");
        assert_eq!(class_now.teacher_id, None);
    }

    #[tokio::test]
    async fn test_delete_missing_teacher_returns_false() {
        let storage = test_storage().await;
        assert!(!storage.delete_teacher_impl(999).await.expect("delete"));
    }
}
