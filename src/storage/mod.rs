//! 存储层
//!
//! 服务层只依赖 [`Storage`] trait，通过 `Arc<dyn Storage>` 注入。

use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理
    async fn create_user(&self, req: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn add_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>>;
    async fn remove_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn count_users(&self) -> Result<u64>;

    /// 学生管理
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn import_students(&self, rows: Vec<CreateStudentRequest>) -> Result<usize>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_code(&self, code: &str) -> Result<Option<Student>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn set_student_status(&self, id: i64, status: StudentStatus) -> Result<bool>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn list_student_assignments(&self, student_id: i64) -> Result<Vec<StudentAssignment>>;
    async fn create_student_assignment(
        &self,
        student_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<StudentAssignment>;
    async fn update_student_assignment(
        &self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Option<StudentAssignment>>;
    async fn delete_student_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 教师管理
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher>;
    async fn import_teachers(&self, rows: Vec<CreateTeacherRequest>) -> Result<usize>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_code(&self, code: &str) -> Result<Option<Teacher>>;
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn set_teacher_status(&self, id: i64, status: TeacherStatus) -> Result<bool>;
    async fn list_available_homeroom_teachers(&self, school_year: i32) -> Result<Vec<Teacher>>;

    /// 家长管理
    async fn create_parent(&self, req: CreateParentRequest) -> Result<Parent>;
    async fn import_parents(&self, rows: Vec<CreateParentRequest>) -> Result<usize>;
    async fn get_parent_by_id(&self, id: i64) -> Result<Option<Parent>>;
    async fn get_parent_by_user_id(&self, user_id: i64) -> Result<Option<Parent>>;
    async fn list_parents_with_pagination(
        &self,
        query: ParentListQuery,
    ) -> Result<ParentListResponse>;
    async fn update_parent(&self, id: i64, update: UpdateParentRequest) -> Result<Option<Parent>>;
    async fn set_parent_status(&self, id: i64, status: ParentStatus) -> Result<bool>;
    async fn link_child(&self, parent_id: i64, req: LinkChildRequest) -> Result<ParentChild>;
    async fn unlink_child(&self, parent_id: i64, student_id: i64) -> Result<bool>;
    async fn list_children(&self, parent_id: i64) -> Result<Vec<ParentChild>>;

    /// 职员管理
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff>;
    async fn import_staff(&self, rows: Vec<CreateStaffRequest>) -> Result<usize>;
    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>>;
    async fn get_staff_by_user_id(&self, user_id: i64) -> Result<Option<Staff>>;
    async fn list_staff_with_pagination(&self, query: StaffListQuery) -> Result<StaffListResponse>;
    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>>;
    async fn set_staff_status(&self, id: i64, status: StaffStatus) -> Result<bool>;

    /// 班级管理
    async fn create_classroom(&self, new: NewClassroom, actor: &str) -> Result<Classroom>;
    async fn import_classrooms(
        &self,
        rows: Vec<ClassroomImportRow>,
        actor: &str,
    ) -> Result<ClassroomImportResult>;
    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>>;
    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse>;
    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
        actor: &str,
    ) -> Result<Option<Classroom>>;
    async fn delete_classroom(&self, id: i64) -> Result<bool>;
    async fn list_classroom_students(&self, id: i64) -> Result<Vec<ClassroomStudent>>;
    async fn list_classroom_histories(&self, id: i64) -> Result<Vec<ClassroomHistory>>;
    async fn assign_students(
        &self,
        id: i64,
        student_ids: Vec<i64>,
        actor: &str,
    ) -> Result<ClassroomAssignResult>;
    async fn assign_random_students(
        &self,
        id: i64,
        count: u32,
        actor: &str,
    ) -> Result<ClassroomAssignResult>;
    async fn remove_students(&self, id: i64, student_ids: Vec<i64>, actor: &str) -> Result<u64>;
    async fn transfer_student(
        &self,
        id: i64,
        student_id: i64,
        target_id: i64,
        actor: &str,
    ) -> Result<()>;
    async fn bulk_update_classroom_status(
        &self,
        ids: Vec<i64>,
        status: ClassroomStatus,
    ) -> Result<u64>;
    async fn find_homeroom_classroom(
        &self,
        teacher_id: i64,
        school_year: i32,
    ) -> Result<Option<Classroom>>;
    async fn list_homeroom_classroom_ids(&self, teacher_id: i64) -> Result<Vec<i64>>;

    /// 科目管理
    async fn list_subjects(&self, grade: Option<i32>) -> Result<Vec<Subject>>;
    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>>;
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn update_subject(
        &self,
        code: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, code: &str) -> Result<bool>;

    /// 成绩管理
    async fn list_grades(&self, params: GradeListParams) -> Result<Vec<Grade>>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn input_grade(&self, req: InputGradeRequest) -> Result<Grade>;
    async fn update_grade_score(&self, id: i64, score: f64) -> Result<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 出勤管理
    async fn record_attendance(&self, req: RecordAttendanceRequest) -> Result<Attendance>;
    async fn bulk_record_attendance(&self, req: BulkAttendanceRequest) -> Result<Vec<Attendance>>;
    async fn list_student_attendance(
        &self,
        student_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    async fn list_classroom_attendance(
        &self,
        classroom_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 校历管理
    async fn list_events_in_range(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        grade: Option<i32>,
        event_type: Option<EventType>,
    ) -> Result<Vec<CalendarEvent>>;
    async fn list_event_feed(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<CalendarEvent>>;
    async fn list_upcoming_events(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<CalendarEvent>>;
    async fn get_event_by_id(&self, id: i64) -> Result<Option<CalendarEvent>>;
    async fn create_event(&self, req: CreateEventRequest) -> Result<CalendarEvent>;
    async fn import_events(&self, rows: Vec<CreateEventRequest>) -> Result<usize>;
    async fn update_event(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<CalendarEvent>>;
    async fn delete_event(&self, id: i64) -> Result<bool>;

    /// 菜单管理
    async fn list_meals_between(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        target_type: Option<MealTargetType>,
    ) -> Result<Vec<Meal>>;
    async fn get_meal_by_id(&self, id: i64) -> Result<Option<Meal>>;
    async fn create_meal(&self, req: CreateMealRequest) -> Result<Meal>;
    async fn update_meal(&self, id: i64, update: UpdateMealRequest) -> Result<Option<Meal>>;
    async fn delete_meal(&self, id: i64) -> Result<bool>;

    /// 公告板管理
    async fn list_boards(&self, query: BoardListQuery) -> Result<BoardListResponse>;
    async fn list_recent_boards(&self, board_type: BoardType, limit: u64) -> Result<Vec<Board>>;
    async fn get_board_by_id(&self, id: i64) -> Result<Option<Board>>;
    async fn increment_board_view(&self, id: i64) -> Result<()>;
    async fn create_board(&self, writer_id: i64, req: CreateBoardRequest) -> Result<Board>;
    async fn update_board(&self, id: i64, update: UpdateBoardRequest) -> Result<Option<Board>>;
    async fn soft_delete_board(&self, id: i64) -> Result<bool>;
    async fn set_board_pinned(&self, id: i64, pinned: bool) -> Result<bool>;

    /// 教师课表
    async fn list_schedules(&self, teacher_id: i64) -> Result<Vec<TeacherSchedule>>;
    async fn list_schedules_by_day(
        &self,
        teacher_id: i64,
        day: DayOfWeek,
    ) -> Result<Vec<TeacherSchedule>>;
    async fn list_schedules_on_date(
        &self,
        teacher_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<TeacherSchedule>>;
    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<TeacherSchedule>>;
    async fn create_schedule(
        &self,
        teacher_id: i64,
        req: CreateScheduleRequest,
    ) -> Result<TeacherSchedule>;
    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<TeacherSchedule>>;
    async fn delete_schedule(&self, id: i64) -> Result<bool>;

    /// 通知管理
    async fn send_notification(
        &self,
        sender_id: i64,
        req: SendNotificationRequest,
    ) -> Result<Notification>;
    async fn broadcast_notification(
        &self,
        sender_id: i64,
        req: BroadcastNotificationRequest,
    ) -> Result<u64>;
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    async fn list_notifications_with_pagination(
        &self,
        receiver_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    async fn count_unread_notifications(&self, receiver_id: i64) -> Result<u64>;
    async fn mark_notification_read(&self, id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self, receiver_id: i64) -> Result<u64>;
    async fn delete_notification(&self, id: i64) -> Result<bool>;

    /// 系统设置
    async fn get_system_setting(&self) -> Result<Option<SystemSetting>>;
    async fn update_system_setting(&self, req: UpdateSystemSettingRequest) -> Result<SystemSetting>;
    async fn dashboard_stats(&self, school_year: i32) -> Result<DashboardStats>;

    /// 设施管理
    async fn list_facilities_with_pagination(
        &self,
        query: FacilityListQuery,
    ) -> Result<FacilityListResponse>;
    async fn get_facility_by_id(&self, id: i64) -> Result<Option<Facility>>;
    async fn create_facility(&self, req: CreateFacilityRequest) -> Result<Facility>;
    async fn update_facility(
        &self,
        id: i64,
        update: UpdateFacilityRequest,
    ) -> Result<Option<Facility>>;
    async fn delete_facility(&self, id: i64) -> Result<bool>;

    /// 资产管理
    async fn list_assets_with_pagination(&self, query: AssetListQuery) -> Result<AssetListResponse>;
    async fn get_asset_by_id(&self, id: i64) -> Result<Option<Asset>>;
    async fn create_asset(&self, req: CreateAssetRequest) -> Result<Asset>;
    async fn update_asset(&self, id: i64, update: UpdateAssetRequest) -> Result<Option<Asset>>;
    async fn set_asset_status(&self, id: i64, status: AssetStatus) -> Result<bool>;
    async fn delete_asset(&self, id: i64) -> Result<bool>;

    /// 文件管理
    async fn upload_file(
        &self,
        stored_name: &str,
        original_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    async fn get_file_by_stored_name(&self, stored_name: &str) -> Result<Option<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
