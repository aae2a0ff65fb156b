use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::RegisterParentRequest,
    parents::{
        entities::ParentStatus, requests::CreateParentRequest, responses::ParentResponse,
    },
};
use crate::services::{bad_request, error_response};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password_simple, validate_phone};

use super::AuthService;

/// 家长自助注册：创建 PARENT 账号与待审核的家长信息
pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterParentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let email = register_request.email.trim().to_lowercase();

    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }
    if let Err(msg) = validate_name(&register_request.name) {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Some(ref phone) = register_request.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }

    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e, Some(ErrorCode::RegisterFailed))),
    };

    let create_request = CreateParentRequest {
        email,
        password: password_hash,
        name: register_request.name.trim().to_string(),
        phone: register_request.phone,
        code: None,
        emergency_contact: register_request.emergency_contact,
        status: Some(ParentStatus::Pending),
    };

    match storage.create_parent(create_request).await {
        Ok(parent) => {
            tracing::info!("Parent {} registered, waiting for approval", parent.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ParentResponse { parent },
                "Registration successful, waiting for approval",
            )))
        }
        Err(e) => {
            let code = match e {
                SchoolMateError::Conflict(_) => ErrorCode::UserAlreadyExists,
                _ => ErrorCode::RegisterFailed,
            };
            Ok(error_response(&e, Some(code)))
        }
    }
}
