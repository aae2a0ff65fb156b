use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    staff::{entities::StaffStatus, requests::UpdateStaffRequest, responses::StaffResponse},
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::{validate_code, validate_name, validate_phone};

pub async fn update_staff(
    service: &StaffService,
    staff_id: i64,
    update_data: UpdateStaffRequest,
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

    match storage.update_staff(staff_id, update_data).await {
        Ok(Some(staff)) => {
            tracing::info!("Staff {} updated", staff.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StaffResponse { staff },
                "Staff updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::StaffNotFound, "Staff not found")),
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::StaffCodeAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 职员不物理删除，只标记为退职
pub async fn retire_staff(
    service: &StaffService,
    staff_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.set_staff_status(staff_id, StaffStatus::Retired).await {
        Ok(true) => {
            tracing::info!("Staff {} retired", staff_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Staff retired successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::StaffNotFound, "Staff not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
