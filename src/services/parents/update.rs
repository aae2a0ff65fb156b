use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ParentService;
use crate::models::{
    ApiResponse, ErrorCode,
    parents::{entities::ParentStatus, requests::UpdateParentRequest, responses::ParentResponse},
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::{validate_code, validate_name, validate_phone};

pub async fn update_parent(
    service: &ParentService,
    parent_id: i64,
    update_data: UpdateParentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

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
    if let Some(ref code) = update_data.code
        && let Err(msg) = validate_code(code)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.update_parent(parent_id, update_data).await {
        Ok(Some(parent)) => {
            tracing::info!("Parent {} updated", parent.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ParentResponse { parent },
                "Parent updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::ParentNotFound, "Parent not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 审核或停用家长账号
pub async fn change_status(
    service: &ParentService,
    parent_id: i64,
    status: ParentStatus,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.set_parent_status(parent_id, status).await {
        Ok(true) => {
            tracing::info!("Parent {} status changed to {}", parent_id, status);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
                "Parent status changed to {status}"
            ))))
        }
        Ok(false) => Ok(not_found(ErrorCode::ParentNotFound, "Parent not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
