use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    staff::{requests::CreateStaffRequest, responses::StaffResponse},
};
use crate::services::{bad_request, error_response, validate_new_account};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_code;

pub async fn create_staff(
    service: &StaffService,
    mut staff_data: CreateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    staff_data.email = staff_data.email.trim().to_lowercase();
    staff_data.code = staff_data.code.trim().to_string();
    if let Err(response) = validate_new_account(
        &staff_data.email,
        &staff_data.name,
        staff_data.phone.as_deref(),
        &staff_data.password,
    ) {
        return Ok(response);
    }
    if let Err(msg) = validate_code(&staff_data.code) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    staff_data.password = match hash_password(&staff_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e, None)),
    };

    match storage.create_staff(staff_data).await {
        Ok(staff) => {
            tracing::info!("Staff {} ({}) created", staff.name, staff.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StaffResponse { staff },
                "Staff created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::StaffCodeAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
