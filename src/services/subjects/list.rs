use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{
    ApiResponse, ErrorCode,
    subjects::responses::{SubjectListResponse, SubjectResponse},
};
use crate::services::{error_response, not_found};

pub async fn list_subjects(
    service: &SubjectService,
    grade: Option<i32>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_subjects(grade).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectListResponse { items },
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn get_subject(
    service: &SubjectService,
    code: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_subject_by_code(code).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectResponse { subject },
            "Subject retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
