use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{
    ApiResponse,
    classrooms::requests::{ClassroomListParams, ClassroomListQuery},
};
use crate::services::error_response;

pub async fn list_classrooms(
    service: &ClassroomService,
    query: ClassroomListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let list_query = ClassroomListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        school_year: query.school_year,
        grade: query.grade,
        status: query.status,
    };

    match storage.list_classrooms_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classroom list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}
