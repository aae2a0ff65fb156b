use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::UpdateStudentRequest, responses::StudentResponse},
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::{validate_code, validate_name, validate_phone};

/// 修改学籍基本信息，学号变更时重新检查唯一性
pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Some(ref phone) = update_data.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(code) = update_data.code.take() {
        let code = code.trim().to_string();
        if let Err(msg) = validate_code(&code) {
            return Ok(bad_request(ErrorCode::BadRequest, msg));
        }
        update_data.code = Some(code);
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            tracing::info!("Student {} updated", student.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentResponse { student },
                "Student updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e @ SchoolMateError::Conflict(_)) => Ok(error_response(
            &e,
            Some(ErrorCode::StudentCodeAlreadyExists),
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}
