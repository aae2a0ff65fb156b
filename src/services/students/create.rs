use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::services::{bad_request, error_response};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_code, validate_email, validate_name, validate_password_simple, validate_phone,
};

/// 校验新学生的字段，失败时返回 (字段名, 错误信息)
pub(super) fn validate_new_student(req: &CreateStudentRequest) -> Result<(), (&'static str, String)> {
    validate_email(&req.email).map_err(|msg| ("email", msg.to_string()))?;
    validate_name(&req.name).map_err(|msg| ("name", msg.to_string()))?;
    validate_code(&req.code).map_err(|msg| ("code", msg.to_string()))?;
    if let Some(ref phone) = req.phone {
        validate_phone(phone).map_err(|msg| ("phone", msg.to_string()))?;
    }
    validate_password_simple(&req.password).map_err(|msg| ("password", msg))?;
    if let Some(num) = req.attendance_num
        && num <= 0
    {
        return Err(("attendance_num", "Attendance number must be positive".to_string()));
    }
    Ok(())
}

/// 学生的字段错误对应的业务码
pub(super) fn field_error_code(field: &str) -> ErrorCode {
    match field {
        "email" => ErrorCode::UserEmailInvalid,
        "name" => ErrorCode::UserNameInvalid,
        "password" => ErrorCode::UserPasswordInvalid,
        _ => ErrorCode::BadRequest,
    }
}

pub async fn create_student(
    service: &StudentService,
    mut student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    student_data.email = student_data.email.trim().to_lowercase();
    student_data.code = student_data.code.trim().to_string();
    if let Err((field, msg)) = validate_new_student(&student_data) {
        return Ok(bad_request(field_error_code(field), msg));
    }

    student_data.password = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e, None)),
    };

    match storage.create_student(student_data).await {
        Ok(student) => {
            tracing::info!("Student {} ({}) created", student.name, student.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "Student created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => Ok(error_response(
            &e,
            Some(ErrorCode::StudentCodeAlreadyExists),
        )),
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ClassroomNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
