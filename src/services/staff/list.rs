use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::{
    ApiResponse,
    staff::requests::{StaffListParams, StaffListQuery},
};
use crate::services::error_response;

pub async fn list_staff(
    service: &StaffService,
    query: StaffListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let list_query = StaffListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search_type: query.search_type,
        keyword: query.keyword,
        status: query.status,
    };

    match storage.list_staff_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Staff list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}
