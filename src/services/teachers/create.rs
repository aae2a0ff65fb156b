use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::CreateTeacherRequest, responses::TeacherResponse},
};
use crate::services::{bad_request, error_response, validate_new_account};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_code;

pub async fn create_teacher(
    service: &TeacherService,
    mut teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    teacher_data.email = teacher_data.email.trim().to_lowercase();
    teacher_data.code = teacher_data.code.trim().to_string();
    if let Err(response) = validate_new_account(
        &teacher_data.email,
        &teacher_data.name,
        teacher_data.phone.as_deref(),
        &teacher_data.password,
    ) {
        return Ok(response);
    }
    if let Err(msg) = validate_code(&teacher_data.code) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    teacher_data.password = match hash_password(&teacher_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e, None)),
    };

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            tracing::info!("Teacher {} ({}) created", teacher.name, teacher.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherResponse { teacher },
                "Teacher created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => Ok(error_response(
            &e,
            Some(ErrorCode::TeacherCodeAlreadyExists),
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}
