//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assets;
mod attendance;
mod boards;
mod calendar;
mod classrooms;
mod facilities;
mod files;
mod grades;
mod meals;
mod notifications;
mod parents;
mod schedules;
mod staff;
mod students;
mod subjects;
mod system_settings;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolMateError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 直接按 URL 连接并迁移，不读取全局配置
    ///
    /// 单连接池，`sqlite::memory:` 下所有查询共享同一个内存库。
    pub async fn connect(url: &str) -> Result<Self> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| SchoolMateError::database_connection(format!("无法连接到数据库: {e}")))?;
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolMateError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolMateError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolMateError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolMateError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use chrono::NaiveDate;

use crate::models::{
    assets::{
        entities::{Asset, AssetStatus},
        requests::{AssetListQuery, CreateAssetRequest, UpdateAssetRequest},
        responses::AssetListResponse,
    },
    attendance::{
        entities::Attendance,
        requests::{BulkAttendanceRequest, RecordAttendanceRequest},
    },
    boards::{
        entities::{Board, BoardType},
        requests::{BoardListQuery, CreateBoardRequest, UpdateBoardRequest},
        responses::BoardListResponse,
    },
    calendar::{
        entities::{CalendarEvent, EventType},
        requests::{CreateEventRequest, UpdateEventRequest},
    },
    classrooms::{
        entities::{Classroom, ClassroomHistory, ClassroomStatus, ClassroomStudent},
        requests::{ClassroomImportRow, ClassroomListQuery, NewClassroom, UpdateClassroomRequest},
        responses::{ClassroomAssignResult, ClassroomImportResult, ClassroomListResponse},
    },
    facilities::{
        entities::Facility,
        requests::{CreateFacilityRequest, FacilityListQuery, UpdateFacilityRequest},
        responses::FacilityListResponse,
    },
    files::entities::File,
    grades::{
        entities::Grade,
        requests::{GradeListParams, InputGradeRequest},
    },
    meals::{
        entities::{Meal, MealTargetType},
        requests::{CreateMealRequest, UpdateMealRequest},
    },
    notifications::{
        entities::Notification,
        requests::{BroadcastNotificationRequest, NotificationListQuery, SendNotificationRequest},
        responses::NotificationListResponse,
    },
    parents::{
        entities::{Parent, ParentChild, ParentStatus},
        requests::{CreateParentRequest, LinkChildRequest, ParentListQuery, UpdateParentRequest},
        responses::ParentListResponse,
    },
    schedules::{
        entities::{DayOfWeek, TeacherSchedule},
        requests::{CreateScheduleRequest, UpdateScheduleRequest},
    },
    staff::{
        entities::{Staff, StaffStatus},
        requests::{CreateStaffRequest, StaffListQuery, UpdateStaffRequest},
        responses::StaffListResponse,
    },
    students::{
        entities::{Student, StudentAssignment, StudentStatus},
        requests::{
            CreateAssignmentRequest, CreateStudentRequest, StudentListQuery,
            UpdateAssignmentRequest, UpdateStudentRequest,
        },
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
    system::{
        entities::{DashboardStats, SystemSetting},
        requests::UpdateSystemSettingRequest,
    },
    teachers::{
        entities::{Teacher, TeacherStatus},
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        self.create_user_impl(req).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn add_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        self.add_user_role_impl(id, role).await
    }

    async fn remove_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        self.remove_user_role_impl(id, role).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn import_students(&self, rows: Vec<CreateStudentRequest>) -> Result<usize> {
        self.import_students_impl(rows).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_code(&self, code: &str) -> Result<Option<Student>> {
        self.get_student_by_code_impl(code).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn set_student_status(&self, id: i64, status: StudentStatus) -> Result<bool> {
        self.set_student_status_impl(id, status).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn list_student_assignments(&self, student_id: i64) -> Result<Vec<StudentAssignment>> {
        self.list_student_assignments_impl(student_id).await
    }

    async fn create_student_assignment(
        &self,
        student_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<StudentAssignment> {
        self.create_student_assignment_impl(student_id, req).await
    }

    async fn update_student_assignment(
        &self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Option<StudentAssignment>> {
        self.update_student_assignment_impl(assignment_id, req).await
    }

    async fn delete_student_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_student_assignment_impl(assignment_id).await
    }

    // 教师模块
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(req).await
    }

    async fn import_teachers(&self, rows: Vec<CreateTeacherRequest>) -> Result<usize> {
        self.import_teachers_impl(rows).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_code(&self, code: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_code_impl(code).await
    }

    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_user_id_impl(user_id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn set_teacher_status(&self, id: i64, status: TeacherStatus) -> Result<bool> {
        self.set_teacher_status_impl(id, status).await
    }

    async fn list_available_homeroom_teachers(&self, school_year: i32) -> Result<Vec<Teacher>> {
        self.list_available_homeroom_teachers_impl(school_year).await
    }

    // 家长模块
    async fn create_parent(&self, req: CreateParentRequest) -> Result<Parent> {
        self.create_parent_impl(req).await
    }

    async fn import_parents(&self, rows: Vec<CreateParentRequest>) -> Result<usize> {
        self.import_parents_impl(rows).await
    }

    async fn get_parent_by_id(&self, id: i64) -> Result<Option<Parent>> {
        self.get_parent_by_id_impl(id).await
    }

    async fn get_parent_by_user_id(&self, user_id: i64) -> Result<Option<Parent>> {
        self.get_parent_by_user_id_impl(user_id).await
    }

    async fn list_parents_with_pagination(
        &self,
        query: ParentListQuery,
    ) -> Result<ParentListResponse> {
        self.list_parents_with_pagination_impl(query).await
    }

    async fn update_parent(&self, id: i64, update: UpdateParentRequest) -> Result<Option<Parent>> {
        self.update_parent_impl(id, update).await
    }

    async fn set_parent_status(&self, id: i64, status: ParentStatus) -> Result<bool> {
        self.set_parent_status_impl(id, status).await
    }

    async fn link_child(&self, parent_id: i64, req: LinkChildRequest) -> Result<ParentChild> {
        self.link_child_impl(parent_id, req).await
    }

    async fn unlink_child(&self, parent_id: i64, student_id: i64) -> Result<bool> {
        self.unlink_child_impl(parent_id, student_id).await
    }

    async fn list_children(&self, parent_id: i64) -> Result<Vec<ParentChild>> {
        self.list_children_impl(parent_id).await
    }

    // 职员模块
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff> {
        self.create_staff_impl(req).await
    }

    async fn import_staff(&self, rows: Vec<CreateStaffRequest>) -> Result<usize> {
        self.import_staff_impl(rows).await
    }

    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>> {
        self.get_staff_by_id_impl(id).await
    }

    async fn get_staff_by_user_id(&self, user_id: i64) -> Result<Option<Staff>> {
        self.get_staff_by_user_id_impl(user_id).await
    }

    async fn list_staff_with_pagination(&self, query: StaffListQuery) -> Result<StaffListResponse> {
        self.list_staff_with_pagination_impl(query).await
    }

    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>> {
        self.update_staff_impl(id, update).await
    }

    async fn set_staff_status(&self, id: i64, status: StaffStatus) -> Result<bool> {
        self.set_staff_status_impl(id, status).await
    }

    // 班级模块
    async fn create_classroom(&self, new: NewClassroom, actor: &str) -> Result<Classroom> {
        self.create_classroom_impl(new, actor).await
    }

    async fn import_classrooms(
        &self,
        rows: Vec<ClassroomImportRow>,
        actor: &str,
    ) -> Result<ClassroomImportResult> {
        self.import_classrooms_impl(rows, actor).await
    }

    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>> {
        self.get_classroom_by_id_impl(id).await
    }

    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        self.list_classrooms_with_pagination_impl(query).await
    }

    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
        actor: &str,
    ) -> Result<Option<Classroom>> {
        self.update_classroom_impl(id, update, actor).await
    }

    async fn delete_classroom(&self, id: i64) -> Result<bool> {
        self.delete_classroom_impl(id).await
    }

    async fn list_classroom_students(&self, id: i64) -> Result<Vec<ClassroomStudent>> {
        self.list_classroom_students_impl(id).await
    }

    async fn list_classroom_histories(&self, id: i64) -> Result<Vec<ClassroomHistory>> {
        self.list_classroom_histories_impl(id).await
    }

    async fn assign_students(
        &self,
        id: i64,
        student_ids: Vec<i64>,
        actor: &str,
    ) -> Result<ClassroomAssignResult> {
        self.assign_students_impl(id, student_ids, actor).await
    }

    async fn assign_random_students(
        &self,
        id: i64,
        count: u32,
        actor: &str,
    ) -> Result<ClassroomAssignResult> {
        self.assign_random_students_impl(id, count, actor).await
    }

    async fn remove_students(&self, id: i64, student_ids: Vec<i64>, actor: &str) -> Result<u64> {
        self.remove_students_impl(id, student_ids, actor).await
    }

    async fn transfer_student(
        &self,
        id: i64,
        student_id: i64,
        target_id: i64,
        actor: &str,
    ) -> Result<()> {
        self.transfer_student_impl(id, student_id, target_id, actor).await
    }

    async fn bulk_update_classroom_status(
        &self,
        ids: Vec<i64>,
        status: ClassroomStatus,
    ) -> Result<u64> {
        self.bulk_update_classroom_status_impl(ids, status).await
    }

    async fn find_homeroom_classroom(
        &self,
        teacher_id: i64,
        school_year: i32,
    ) -> Result<Option<Classroom>> {
        self.find_homeroom_classroom_impl(teacher_id, school_year).await
    }

    async fn list_homeroom_classroom_ids(&self, teacher_id: i64) -> Result<Vec<i64>> {
        self.list_homeroom_classroom_ids_impl(teacher_id).await
    }

    // 科目模块
    async fn list_subjects(&self, grade: Option<i32>) -> Result<Vec<Subject>> {
        self.list_subjects_impl(grade).await
    }

    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>> {
        self.get_subject_by_code_impl(code).await
    }

    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn update_subject(
        &self,
        code: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(code, update).await
    }

    async fn delete_subject(&self, code: &str) -> Result<bool> {
        self.delete_subject_impl(code).await
    }

    // 成绩模块
    async fn list_grades(&self, params: GradeListParams) -> Result<Vec<Grade>> {
        self.list_grades_impl(params).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn input_grade(&self, req: InputGradeRequest) -> Result<Grade> {
        self.input_grade_impl(req).await
    }

    async fn update_grade_score(&self, id: i64, score: f64) -> Result<Option<Grade>> {
        self.update_grade_score_impl(id, score).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 出勤模块
    async fn record_attendance(&self, req: RecordAttendanceRequest) -> Result<Attendance> {
        self.record_attendance_impl(req).await
    }

    async fn bulk_record_attendance(&self, req: BulkAttendanceRequest) -> Result<Vec<Attendance>> {
        self.bulk_record_attendance_impl(req).await
    }

    async fn list_student_attendance(
        &self,
        student_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.list_student_attendance_impl(student_id, start_date, end_date).await
    }

    async fn list_classroom_attendance(
        &self,
        classroom_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.list_classroom_attendance_impl(classroom_id, date).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    // 校历模块
    async fn list_events_in_range(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        grade: Option<i32>,
        event_type: Option<EventType>,
    ) -> Result<Vec<CalendarEvent>> {
        self.list_events_in_range_impl(first, last, grade, event_type).await
    }

    async fn list_event_feed(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<CalendarEvent>> {
        self.list_event_feed_impl(start, end).await
    }

    async fn list_upcoming_events(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<CalendarEvent>> {
        self.list_upcoming_events_impl(today, limit).await
    }

    async fn get_event_by_id(&self, id: i64) -> Result<Option<CalendarEvent>> {
        self.get_event_by_id_impl(id).await
    }

    async fn create_event(&self, req: CreateEventRequest) -> Result<CalendarEvent> {
        self.create_event_impl(req).await
    }

    async fn import_events(&self, rows: Vec<CreateEventRequest>) -> Result<usize> {
        self.import_events_impl(rows).await
    }

    async fn update_event(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<CalendarEvent>> {
        self.update_event_impl(id, update).await
    }

    async fn delete_event(&self, id: i64) -> Result<bool> {
        self.delete_event_impl(id).await
    }

    // 菜单模块
    async fn list_meals_between(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        target_type: Option<MealTargetType>,
    ) -> Result<Vec<Meal>> {
        self.list_meals_between_impl(first, last, target_type).await
    }

    async fn get_meal_by_id(&self, id: i64) -> Result<Option<Meal>> {
        self.get_meal_by_id_impl(id).await
    }

    async fn create_meal(&self, req: CreateMealRequest) -> Result<Meal> {
        self.create_meal_impl(req).await
    }

    async fn update_meal(&self, id: i64, update: UpdateMealRequest) -> Result<Option<Meal>> {
        self.update_meal_impl(id, update).await
    }

    async fn delete_meal(&self, id: i64) -> Result<bool> {
        self.delete_meal_impl(id).await
    }

    // 公告板模块
    async fn list_boards(&self, query: BoardListQuery) -> Result<BoardListResponse> {
        self.list_boards_impl(query).await
    }

    async fn list_recent_boards(&self, board_type: BoardType, limit: u64) -> Result<Vec<Board>> {
        self.list_recent_boards_impl(board_type, limit).await
    }

    async fn get_board_by_id(&self, id: i64) -> Result<Option<Board>> {
        self.get_board_by_id_impl(id).await
    }

    async fn increment_board_view(&self, id: i64) -> Result<()> {
        self.increment_board_view_impl(id).await
    }

    async fn create_board(&self, writer_id: i64, req: CreateBoardRequest) -> Result<Board> {
        self.create_board_impl(writer_id, req).await
    }

    async fn update_board(&self, id: i64, update: UpdateBoardRequest) -> Result<Option<Board>> {
        self.update_board_impl(id, update).await
    }

    async fn soft_delete_board(&self, id: i64) -> Result<bool> {
        self.soft_delete_board_impl(id).await
    }

    async fn set_board_pinned(&self, id: i64, pinned: bool) -> Result<bool> {
        self.set_board_pinned_impl(id, pinned).await
    }

    // 课表模块
    async fn list_schedules(&self, teacher_id: i64) -> Result<Vec<TeacherSchedule>> {
        self.list_schedules_impl(teacher_id).await
    }

    async fn list_schedules_by_day(
        &self,
        teacher_id: i64,
        day: DayOfWeek,
    ) -> Result<Vec<TeacherSchedule>> {
        self.list_schedules_by_day_impl(teacher_id, day).await
    }

    async fn list_schedules_on_date(
        &self,
        teacher_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<TeacherSchedule>> {
        self.list_schedules_on_date_impl(teacher_id, date).await
    }

    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<TeacherSchedule>> {
        self.get_schedule_by_id_impl(id).await
    }

    async fn create_schedule(
        &self,
        teacher_id: i64,
        req: CreateScheduleRequest,
    ) -> Result<TeacherSchedule> {
        self.create_schedule_impl(teacher_id, req).await
    }

    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<TeacherSchedule>> {
        self.update_schedule_impl(id, update).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_schedule_impl(id).await
    }

    // 通知模块
    async fn send_notification(
        &self,
        sender_id: i64,
        req: SendNotificationRequest,
    ) -> Result<Notification> {
        self.send_notification_impl(sender_id, req).await
    }

    async fn broadcast_notification(
        &self,
        sender_id: i64,
        req: BroadcastNotificationRequest,
    ) -> Result<u64> {
        self.broadcast_notification_impl(sender_id, req).await
    }

    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>> {
        self.get_notification_by_id_impl(id).await
    }

    async fn list_notifications_with_pagination(
        &self,
        receiver_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(receiver_id, query).await
    }

    async fn count_unread_notifications(&self, receiver_id: i64) -> Result<u64> {
        self.count_unread_notifications_impl(receiver_id).await
    }

    async fn mark_notification_read(&self, id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id).await
    }

    async fn mark_all_notifications_read(&self, receiver_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(receiver_id).await
    }

    async fn delete_notification(&self, id: i64) -> Result<bool> {
        self.delete_notification_impl(id).await
    }

    // 系统设置模块
    async fn get_system_setting(&self) -> Result<Option<SystemSetting>> {
        self.get_system_setting_impl().await
    }

    async fn update_system_setting(&self, req: UpdateSystemSettingRequest) -> Result<SystemSetting> {
        self.update_system_setting_impl(req).await
    }

    async fn dashboard_stats(&self, school_year: i32) -> Result<DashboardStats> {
        self.dashboard_stats_impl(school_year).await
    }

    // 设施模块
    async fn list_facilities_with_pagination(
        &self,
        query: FacilityListQuery,
    ) -> Result<FacilityListResponse> {
        self.list_facilities_with_pagination_impl(query).await
    }

    async fn get_facility_by_id(&self, id: i64) -> Result<Option<Facility>> {
        self.get_facility_by_id_impl(id).await
    }

    async fn create_facility(&self, req: CreateFacilityRequest) -> Result<Facility> {
        self.create_facility_impl(req).await
    }

    async fn update_facility(
        &self,
        id: i64,
        update: UpdateFacilityRequest,
    ) -> Result<Option<Facility>> {
        self.update_facility_impl(id, update).await
    }

    async fn delete_facility(&self, id: i64) -> Result<bool> {
        self.delete_facility_impl(id).await
    }

    // 资产模块
    async fn list_assets_with_pagination(&self, query: AssetListQuery) -> Result<AssetListResponse> {
        self.list_assets_with_pagination_impl(query).await
    }

    async fn get_asset_by_id(&self, id: i64) -> Result<Option<Asset>> {
        self.get_asset_by_id_impl(id).await
    }

    async fn create_asset(&self, req: CreateAssetRequest) -> Result<Asset> {
        self.create_asset_impl(req).await
    }

    async fn update_asset(&self, id: i64, update: UpdateAssetRequest) -> Result<Option<Asset>> {
        self.update_asset_impl(id, update).await
    }

    async fn set_asset_status(&self, id: i64, status: AssetStatus) -> Result<bool> {
        self.set_asset_status_impl(id, status).await
    }

    async fn delete_asset(&self, id: i64) -> Result<bool> {
        self.delete_asset_impl(id).await
    }

    // 文件模块
    async fn upload_file(
        &self,
        stored_name: &str,
        original_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        self.upload_file_impl(stored_name, original_name, file_size, file_type, user_id).await
    }

    async fn get_file_by_stored_name(&self, stored_name: &str) -> Result<Option<File>> {
        self.get_file_by_stored_name_impl(stored_name).await
    }
}
