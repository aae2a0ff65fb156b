use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::{ApiResponse, ErrorCode, staff::responses::StaffResponse};
use crate::services::{error_response, not_found};

pub async fn get_staff(
    service: &StaffService,
    staff_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_staff_by_id(staff_id).await {
        Ok(Some(staff)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StaffResponse { staff },
            "Staff retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StaffNotFound, "Staff not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
