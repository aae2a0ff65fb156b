use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ParentService;
use crate::models::{ApiResponse, ErrorCode, parents::responses::ParentResponse};
use crate::services::{error_response, not_found};

pub async fn get_parent(
    service: &ParentService,
    parent_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_parent_by_id(parent_id).await {
        Ok(Some(parent)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ParentResponse { parent },
            "Parent retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ParentNotFound, "Parent not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
