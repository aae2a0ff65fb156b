//! 数据模型定义
//!
//! 业务实体、请求/响应 DTO 以及统一的 API 响应结构。
//! 带 `#[ts(export)]` 的类型会在 `cargo test` 时导出为前端 TypeScript 类型。

pub mod common;

pub mod assets;
pub mod attendance;
pub mod auth;
pub mod boards;
pub mod calendar;
pub mod classrooms;
pub mod facilities;
pub mod files;
pub mod grades;
pub mod meals;
pub mod notifications;
pub mod parents;
pub mod schedules;
pub mod staff;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；1xxx 为通用错误；2xxx 起按业务模块划分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    InvalidState = 1022,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证 / 用户
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserEmailInvalid = 2003,
    UserPasswordInvalid = 2004,
    UserNameInvalid = 2005,
    UserRoleInvalid = 2006,
    UserLastRole = 2007,
    CanNotDeleteCurrentUser = 2008,
    RegisterFailed = 2009,

    // 学生 / 教师 / 家长 / 职员
    StudentNotFound = 3000,
    StudentCodeAlreadyExists = 3001,
    AssignmentAlreadyExists = 3002,
    AssignmentNotFound = 3003,
    TeacherNotFound = 3100,
    TeacherCodeAlreadyExists = 3101,
    ParentNotFound = 3200,
    FamilyRelationNotFound = 3201,
    StaffNotFound = 3300,
    StaffCodeAlreadyExists = 3301,

    // 班级 / 科目 / 成绩 / 出勤
    ClassroomNotFound = 4000,
    ClassroomAlreadyExists = 4001,
    ClassroomNotEmpty = 4002,
    SubjectNotFound = 4100,
    SubjectAlreadyExists = 4101,
    GradeNotFound = 4200,
    GradeInvalid = 4201,
    AttendanceNotFound = 4300,

    // 日历 / 食谱 / 公告 / 课表 / 通知
    CalendarEventNotFound = 5000,
    MealNotFound = 5100,
    BoardNotFound = 5200,
    BoardPermissionDenied = 5201,
    ScheduleNotFound = 5300,
    ScheduleConflict = 5301,
    SchedulePermissionDenied = 5302,
    NotificationNotFound = 5400,

    // 设施 / 资产 / 文件
    FacilityNotFound = 6000,
    AssetNotFound = 6100,
    AssetCodeAlreadyExists = 6101,
    FileNotFound = 6200,
    FileUploadFailed = 6201,
    FileTypeNotAllowed = 6202,
    FileSizeExceeded = 6203,
    MultifileUploadNotAllowed = 6204,
    ImportFileMissingColumn = 6300,
    ImportFileParseFailed = 6301,
    ImportFileDataInvalid = 6302,
}
