use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ParentService;
use crate::models::{
    ApiResponse,
    parents::requests::{ParentListParams, ParentListQuery},
};
use crate::services::error_response;

/// 按姓名、邮箱、电话或子女姓名检索
pub async fn list_parents(
    service: &ParentService,
    query: ParentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let list_query = ParentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search_type: query.search_type,
        keyword: query.keyword,
        status: query.status,
    };

    match storage.list_parents_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Parent list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}
