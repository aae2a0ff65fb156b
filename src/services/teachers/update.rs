use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{
        entities::TeacherStatus, requests::UpdateTeacherRequest, responses::TeacherResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::{validate_code, validate_name, validate_phone};

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
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
    if let Some(ref code) = update_data.code
        && let Err(msg) = validate_code(code)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => {
            tracing::info!("Teacher {} updated", teacher.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TeacherResponse { teacher },
                "Teacher updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e @ SchoolMateError::Conflict(_)) => Ok(error_response(
            &e,
            Some(ErrorCode::TeacherCodeAlreadyExists),
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn retire_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .set_teacher_status(teacher_id, TeacherStatus::Retired)
        .await
    {
        Ok(true) => {
            tracing::info!("Teacher {} retired", teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Teacher status changed to retired",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
