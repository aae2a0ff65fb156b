use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    subjects::{
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
        responses::SubjectResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::{validate_code, validate_grade_year};

fn validate_subject_fields(
    name: Option<&str>,
    grade: Option<i32>,
    credits: Option<i32>,
) -> Result<(), &'static str> {
    if let Some(name) = name
        && (name.trim().is_empty() || name.chars().count() > 50)
    {
        return Err("Subject name must be 1-50 characters");
    }
    if let Some(grade) = grade {
        validate_grade_year(grade)?;
    }
    if credits.is_some_and(|c| c < 0) {
        return Err("Credits cannot be negative");
    }
    Ok(())
}

pub async fn create_subject(
    service: &SubjectService,
    mut subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    subject_data.code = subject_data.code.trim().to_string();
    if let Err(msg) = validate_code(&subject_data.code) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_subject_fields(
        Some(&subject_data.name),
        Some(subject_data.grade),
        subject_data.credits,
    ) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            tracing::info!("Subject {} created", subject.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubjectResponse { subject },
                "Subject created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::SubjectAlreadyExists)))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::TeacherNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_subject(
    service: &SubjectService,
    code: &str,
    update_data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_subject_fields(
        update_data.name.as_deref(),
        update_data.grade,
        update_data.credits,
    ) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.update_subject(code, update_data).await {
        Ok(Some(subject)) => {
            tracing::info!("Subject {} updated", subject.code);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubjectResponse { subject },
                "Subject updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::TeacherNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_subject(
    service: &SubjectService,
    code: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_subject(code).await {
        Ok(true) => {
            tracing::info!("Subject {} deleted", code);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_subject_fields() {
        assert!(validate_subject_fields(Some("국어"), Some(1), Some(4)).is_ok());
        assert!(validate_subject_fields(None, None, None).is_ok());
        assert!(validate_subject_fields(Some("  "), None, None).is_err());
        assert!(validate_subject_fields(None, Some(4), None).is_err());
        assert!(validate_subject_fields(None, None, Some(-1)).is_err());
    }
}
