use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ParentService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    parents::{requests::CreateParentRequest, responses::ParentResponse},
};
use crate::services::{bad_request, error_response, validate_new_account};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_code;

pub async fn create_parent(
    service: &ParentService,
    mut parent_data: CreateParentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    parent_data.email = parent_data.email.trim().to_lowercase();
    if let Err(response) = validate_new_account(
        &parent_data.email,
        &parent_data.name,
        parent_data.phone.as_deref(),
        &parent_data.password,
    ) {
        return Ok(response);
    }
    if let Some(ref code) = parent_data.code
        && let Err(msg) = validate_code(code)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    parent_data.password = match hash_password(&parent_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e, None)),
    };

    match storage.create_parent(parent_data).await {
        Ok(parent) => {
            tracing::info!("Parent {} created", parent.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ParentResponse { parent },
                "Parent created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::UserAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
