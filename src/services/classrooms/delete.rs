use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::errors::SchoolMateError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

/// 仍有班主任或学生的班级不能删除
pub async fn delete_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_classroom(classroom_id).await {
        Ok(true) => {
            tracing::info!("Classroom {} deleted", classroom_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Classroom deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e @ SchoolMateError::InvalidState(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ClassroomNotEmpty)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
