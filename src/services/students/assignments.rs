use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::StudentAssignmentListResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};

pub async fn list_assignments(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(error_response(&e, None)),
    }

    match storage.list_student_assignments(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentAssignmentListResponse { items },
            "Assignments retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 每个学年只能有一条分班记录
pub async fn create_assignment(
    service: &StudentService,
    student_id: i64,
    assignment_data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Some(num) = assignment_data.attendance_num
        && num <= 0
    {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Attendance number must be positive",
        ));
    }

    match storage
        .create_student_assignment(student_id, assignment_data)
        .await
    {
        Ok(assignment) => {
            tracing::info!(
                "Student {} assigned to classroom {} for {}",
                student_id,
                assignment.classroom_id,
                assignment.school_year
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Assignment created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::AssignmentAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_assignment(
    service: &StudentService,
    assignment_id: i64,
    assignment_data: UpdateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Some(num) = assignment_data.attendance_num
        && num <= 0
    {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Attendance number must be positive",
        ));
    }

    match storage
        .update_student_assignment(assignment_id, assignment_data)
        .await
    {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_assignment(
    service: &StudentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_student_assignment(assignment_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Assignment deleted successfully",
        ))),
        Ok(false) => Ok(not_found(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}
