use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::entities::StudentStatus};
use crate::services::{error_response, not_found};

/// 学籍保留，仅将状态改为自退
pub async fn soft_delete_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .set_student_status(student_id, StudentStatus::Dropout)
        .await
    {
        Ok(true) => {
            tracing::info!("Student {} marked as dropout", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student status changed to dropout",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 永久删除学生及其账号
pub async fn purge_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_student(student_id).await {
        Ok(true) => {
            tracing::info!("Student {} permanently deleted", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student deleted permanently",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
