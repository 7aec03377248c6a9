use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, Submission},
        requests::{AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    attendance::{
        entities::{AttendanceRecord, AttendanceSession},
        requests::{CreateAttendanceSessionRequest, MarkAttendanceEntry},
    },
    classes::{
        entities::Class,
        requests::{ClassListParams, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    events::{
        entities::Event,
        requests::{CreateEventRequest, EventListParams, UpdateEventRequest},
        responses::EventListResponse,
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest},
        responses::GradeListResponse,
    },
    students::{
        entities::{Student, StudentItem},
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::{ClassReassignment, Teacher, TeacherItem},
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    timetable::{
        entities::TimetableEntry,
        requests::{
            CreateTimetableEntryRequest, TimetableListParams, UpdateTimetableEntryRequest,
        },
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已在服务层哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 教师管理方法
    // 创建教师：账号与档案在同一事务中写入
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<TeacherItem>;
    // 通过ID获取教师档案
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<TeacherItem>>;
    // 通过用户ID获取教师档案
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers_with_pagination(
        &self,
        params: TeacherListParams,
    ) -> Result<TeacherListResponse>;
    // 更新教师档案
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<TeacherItem>>;
    // 删除教师：档案行与账号行在同一事务中删除，名下班级释放
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    // 教师名下的班级
    async fn get_teacher_classes(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 班级重新指派：冲突时不写入，返回冲突班级
    async fn reassign_teacher_classes(
        &self,
        teacher_id: i64,
        class_ids: Vec<i64>,
    ) -> Result<ClassReassignment>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生：账号与档案在同一事务中写入
    async fn create_student(&self, student: CreateStudentRequest) -> Result<StudentItem>;
    // 通过ID获取学生档案
    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentItem>>;
    // 通过用户ID获取学生档案
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        params: StudentListParams,
    ) -> Result<StudentListResponse>;
    // 更新学生档案
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentItem>>;
    // 删除学生：档案行与账号行在同一事务中删除
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 统计学生数量
    async fn count_students(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        params: ClassListParams,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 统计班级数量
    async fn count_classes(&self) -> Result<u64>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目信息
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        params: SubjectListParams,
    ) -> Result<SubjectListResponse>;
    // 更新科目信息
    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除科目
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;
    // 统计科目数量
    async fn count_subjects(&self) -> Result<u64>;

    /// 作业管理方法
    // 布置作业
    async fn create_assignment(
        &self,
        assignment: CreateAssignmentRequest,
        teacher_id: i64,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出作业
    async fn list_assignments_with_pagination(
        &self,
        params: AssignmentListParams,
    ) -> Result<AssignmentListResponse>;
    // 更新作业（PATCH 语义）
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 学生提交作业（同一学生重复提交时覆盖）
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: String,
    ) -> Result<Submission>;
    // 列出某份作业的全部提交
    async fn list_submissions_by_assignment(&self, assignment_id: i64)
    -> Result<Vec<Submission>>;

    /// 成绩管理方法
    // 录入成绩
    async fn create_grade(&self, grade: CreateGradeRequest, graded_by: Option<i64>)
    -> Result<Grade>;
    // 通过ID获取成绩
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 列出成绩
    async fn list_grades_with_pagination(
        &self,
        params: GradeListParams,
    ) -> Result<GradeListResponse>;
    // 更新成绩
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    // 删除成绩
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 创建考勤场次
    async fn create_attendance_session(
        &self,
        session: CreateAttendanceSessionRequest,
        created_by: i64,
    ) -> Result<AttendanceSession>;
    // 通过ID获取考勤场次
    async fn get_attendance_session_by_id(&self, id: i64) -> Result<Option<AttendanceSession>>;
    // 列出考勤场次（可按班级过滤）
    async fn list_attendance_sessions(
        &self,
        class_id: Option<i64>,
    ) -> Result<Vec<AttendanceSession>>;
    // 批量点名：整场记录在同一事务中覆盖写入
    async fn mark_attendance(
        &self,
        session_id: i64,
        entries: Vec<MarkAttendanceEntry>,
    ) -> Result<Vec<AttendanceRecord>>;
    // 列出某场考勤的记录
    async fn list_attendance_records(&self, session_id: i64) -> Result<Vec<AttendanceRecord>>;

    /// 校历事件管理方法
    // 创建事件
    async fn create_event(&self, event: CreateEventRequest) -> Result<Event>;
    // 通过ID获取事件
    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>>;
    // 列出事件
    async fn list_events_with_pagination(
        &self,
        params: EventListParams,
    ) -> Result<EventListResponse>;
    // 更新事件
    async fn update_event(&self, id: i64, update: UpdateEventRequest) -> Result<Option<Event>>;
    // 删除事件
    async fn delete_event(&self, id: i64) -> Result<bool>;
    // 即将开始的事件（仪表盘用）
    async fn list_upcoming_events(&self, limit: u64) -> Result<Vec<Event>>;

    /// 课程表管理方法
    // 创建课程表条目
    async fn create_timetable_entry(
        &self,
        entry: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry>;
    // 列出课程表条目
    async fn list_timetable_entries(
        &self,
        params: TimetableListParams,
    ) -> Result<Vec<TimetableEntry>>;
    // 更新课程表条目
    async fn update_timetable_entry(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>>;
    // 删除课程表条目
    async fn delete_timetable_entry(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
