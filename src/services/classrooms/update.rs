use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassroomService, actor_of};
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::{
        requests::{BulkStatusRequest, UpdateClassroomRequest},
        responses::{BulkStatusResponse, ClassroomResponse},
    },
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::validate_grade_and_class;

pub async fn update_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    update_data: UpdateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let actor = match actor_of(request) {
        Ok(actor) => actor,
        Err(response) => return Ok(response),
    };

    // 只校验请求中出现的字段
    if let Err(msg) = validate_grade_and_class(
        update_data.grade.unwrap_or(1),
        update_data.class_num.unwrap_or(1),
    ) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage
        .update_classroom(classroom_id, update_data, &actor)
        .await
    {
        Ok(Some(classroom)) => {
            tracing::info!("Classroom {} updated by {}", classroom_id, actor);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ClassroomResponse { classroom },
                "Classroom updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ClassroomAlreadyExists)))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::TeacherNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn bulk_update_status(
    service: &ClassroomService,
    status_data: BulkStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if status_data.classroom_ids.is_empty() {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "At least one classroom must be selected",
        ));
    }

    let status = status_data.status;
    match storage
        .bulk_update_classroom_status(status_data.classroom_ids, status)
        .await
    {
        Ok(updated) => {
            tracing::info!("{} classrooms changed to {}", updated, status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                BulkStatusResponse { updated },
                "Classroom status updated successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
