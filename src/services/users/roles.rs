use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::UserRole, responses::UserResponse},
};
use crate::services::{error_response, not_found};

/// 添加角色，已有该角色时不做改动
pub async fn add_role(
    service: &UserService,
    user_id: i64,
    role: UserRole,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.add_user_role(user_id, role).await {
        Ok(Some(user)) => {
            tracing::info!("Role {} granted to user {}", role, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "Role added successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn remove_role(
    service: &UserService,
    user_id: i64,
    role: UserRole,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.remove_user_role(user_id, role).await {
        Ok(Some(user)) => {
            tracing::info!("Role {} revoked from user {}", role, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "Role removed successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e @ SchoolMateError::InvalidState(_)) => {
            Ok(error_response(&e, Some(ErrorCode::UserLastRole)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
