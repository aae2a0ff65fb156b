use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse,
    teachers::requests::{TeacherListParams, TeacherListQuery},
};
use crate::services::error_response;

pub async fn list_teachers(
    service: &TeacherService,
    query: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let list_query = TeacherListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search_type: query.search_type,
        keyword: query.keyword,
        status: query.status,
    };

    match storage.list_teachers_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}
