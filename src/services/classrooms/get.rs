use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::responses::ClassroomDetailResponse};
use crate::services::{error_response, not_found};

/// 班级详情：学生名单与变更记录
pub async fn get_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let classroom = match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) => classroom,
        Ok(None) => return Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };

    let students = match storage.list_classroom_students(classroom_id).await {
        Ok(students) => students,
        Err(e) => return Ok(error_response(&e, None)),
    };
    let histories = match storage.list_classroom_histories(classroom_id).await {
        Ok(histories) => histories,
        Err(e) => return Ok(error_response(&e, None)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassroomDetailResponse {
            classroom,
            students,
            histories,
        },
        "Classroom retrieved successfully",
    )))
}
