//! 业务服务层
//!
//! 每个领域一个 `XxxService`，由路由层的懒加载静态实例调用。
//! 服务负责参数校验、权限判断与响应组装，存储访问统一经过 [`Storage`]。

pub mod assets;
pub mod attendance;
pub mod auth;
pub mod boards;
pub mod calendar;
pub mod classrooms;
pub(crate) mod csv_import;
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

pub use assets::AssetService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use boards::BoardService;
pub use calendar::CalendarService;
pub use classrooms::ClassroomService;
pub use facilities::FacilityService;
pub use files::FileService;
pub use grades::GradeService;
pub use meals::MealService;
pub use notifications::NotificationService;
pub use parents::ParentService;
pub use schedules::ScheduleService;
pub use staff::StaffService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use teachers::TeacherService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::errors::SchoolMateError;
use crate::middlewares::RequireJWT;
use crate::models::system::entities::SystemSetting;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app_data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 当前登录用户，未登录时给出 401 响应
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}

/// 业务错误转换为响应，服务端错误写日志
pub(crate) fn error_response(err: &SchoolMateError, code: Option<ErrorCode>) -> HttpResponse {
    if !err.is_client_error() {
        tracing::error!("{}", err);
    }
    ApiResponse::from_error(err, code)
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn forbidden(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(code, message))
}

/// 新账号的公共字段校验，失败时给出 400 响应
pub(crate) fn validate_new_account(
    email: &str,
    name: &str,
    phone: Option<&str>,
    password: &str,
) -> Result<(), HttpResponse> {
    use crate::utils::validate::{
        validate_email, validate_name, validate_password_simple, validate_phone,
    };

    validate_email(email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;
    validate_name(name).map_err(|msg| bad_request(ErrorCode::UserNameInvalid, msg))?;
    if let Some(phone) = phone {
        validate_phone(phone).map_err(|msg| bad_request(ErrorCode::BadRequest, msg))?;
    }
    validate_password_simple(password)
        .map_err(|msg| bad_request(ErrorCode::UserPasswordInvalid, msg))
}

/// 当前学年与学期，数据库中没有设置时使用配置默认值
pub(crate) async fn current_setting(
    storage: &Arc<dyn Storage>,
) -> crate::errors::Result<SystemSetting> {
    if let Some(setting) = system::SettingCache::get().await {
        return Ok(setting);
    }
    match storage.get_system_setting().await? {
        Some(setting) => {
            system::SettingCache::update(setting.clone()).await;
            Ok(setting)
        }
        None => Ok(SystemSetting::from_config()),
    }
}
