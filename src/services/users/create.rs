use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::services::{bad_request, error_response};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password_simple, validate_phone};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    user_data.email = user_data.email.trim().to_lowercase();
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }
    if let Err(msg) = validate_name(&user_data.name) {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Some(ref phone) = user_data.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if user_data.roles.is_empty() {
        return Ok(bad_request(
            ErrorCode::UserRoleInvalid,
            "At least one role is required",
        ));
    }
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }

    // 明文密码替换为哈希
    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e, None)),
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            tracing::info!("User {} created with roles {}", user.email, user.roles_claim());
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserResponse { user },
                "User created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::UserAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
