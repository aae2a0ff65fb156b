use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, current_user, error_response, not_found};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_name, validate_password_simple, validate_phone};

use super::AuthService;

/// 修改本人资料，角色与状态不在此处变更
pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let current_user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Some(ref phone) = update_data.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let hashed_password = match update_data.password {
        Some(ref password) => {
            if let Err(msg) = validate_password_simple(password) {
                return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
            }
            match hash_password(password) {
                Ok(hash) => Some(hash),
                Err(e) => return Ok(error_response(&e, None)),
            }
        }
        None => None,
    };

    let storage_update = UpdateUserRequest {
        name: update_data.name.map(|n| n.trim().to_string()),
        phone: update_data.phone,
        password: hashed_password,
        status: None,
        profile_image: update_data.profile_image,
    };

    match storage.update_user(current_user.id, storage_update).await {
        Ok(Some(user)) => {
            tracing::info!("User {} updated profile", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "Profile updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
