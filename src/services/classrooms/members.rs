use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassroomService, actor_of};
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::{
        requests::TransferStudentRequest,
        responses::{ClassroomAssignResult, RemoveStudentsResponse},
    },
};
use crate::services::{bad_request, error_response};

fn assign_message(result: &ClassroomAssignResult) -> String {
    format!(
        "{} assigned, {} moved, {} skipped",
        result.assigned, result.moved, result.skipped
    )
}

/// 分配指定学生：同学年其他班的学生移入本班，已在本班的跳过
pub async fn assign_students(
    service: &ClassroomService,
    classroom_id: i64,
    student_ids: Vec<i64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let actor = match actor_of(request) {
        Ok(actor) => actor,
        Err(response) => return Ok(response),
    };

    if student_ids.is_empty() {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "At least one student must be selected",
        ));
    }

    match storage
        .assign_students(classroom_id, student_ids, &actor)
        .await
    {
        Ok(result) => {
            let message = assign_message(&result);
            tracing::info!("Classroom {}: {}", classroom_id, message);
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, message)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 从该学年尚未分班的在读学生中随机分配
pub async fn assign_random(
    service: &ClassroomService,
    classroom_id: i64,
    count: u32,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let actor = match actor_of(request) {
        Ok(actor) => actor,
        Err(response) => return Ok(response),
    };

    if count == 0 {
        return Ok(bad_request(ErrorCode::BadRequest, "Count must be positive"));
    }

    match storage
        .assign_random_students(classroom_id, count, &actor)
        .await
    {
        Ok(result) => {
            tracing::info!(
                "Classroom {}: {} of {} requested students assigned randomly",
                classroom_id,
                result.assigned,
                count
            );
            let message = assign_message(&result);
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, message)))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ClassroomNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn remove_students(
    service: &ClassroomService,
    classroom_id: i64,
    student_ids: Vec<i64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let actor = match actor_of(request) {
        Ok(actor) => actor,
        Err(response) => return Ok(response),
    };

    if student_ids.is_empty() {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "At least one student must be selected",
        ));
    }

    match storage
        .remove_students(classroom_id, student_ids, &actor)
        .await
    {
        Ok(removed) => {
            tracing::info!("Classroom {}: {} students removed", classroom_id, removed);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RemoveStudentsResponse { removed },
                "Students removed successfully",
            )))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ClassroomNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 转班，学生排到目标班级末尾
pub async fn transfer_student(
    service: &ClassroomService,
    classroom_id: i64,
    transfer_data: TransferStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let actor = match actor_of(request) {
        Ok(actor) => actor,
        Err(response) => return Ok(response),
    };

    match storage
        .transfer_student(
            classroom_id,
            transfer_data.student_id,
            transfer_data.target_classroom_id,
            &actor,
        )
        .await
    {
        Ok(()) => {
            tracing::info!(
                "Student {} transferred from classroom {} to {}",
                transfer_data.student_id,
                classroom_id,
                transfer_data.target_classroom_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student transferred successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
