use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScheduleService, current_teacher, ensure_owner};
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    schedules::{
        entities::{RepeatType, validate_schedule_times},
        requests::{CreateScheduleRequest, UpdateScheduleRequest},
        responses::ScheduleResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};

fn validate_subject_name(name: &str) -> Result<(), &'static str> {
    let len = name.trim().chars().count();
    if len == 0 || len > 50 {
        return Err("Subject name must be 1-50 characters");
    }
    Ok(())
}

pub async fn get_schedule(
    service: &ScheduleService,
    schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teacher = match current_teacher(&storage, request).await {
        Ok(teacher) => teacher,
        Err(response) => return Ok(response),
    };

    match storage.get_schedule_by_id(schedule_id).await {
        Ok(Some(schedule)) => {
            if let Err(e) = ensure_owner(&schedule, &teacher) {
                return Ok(error_response(&e, Some(ErrorCode::SchedulePermissionDenied)));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ScheduleResponse { schedule },
                "Schedule retrieved successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::ScheduleNotFound, "Schedule not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 周期课表与同一天同一节次冲突时拒绝
pub async fn create_schedule(
    service: &ScheduleService,
    schedule_data: CreateScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teacher = match current_teacher(&storage, request).await {
        Ok(teacher) => teacher,
        Err(response) => return Ok(response),
    };

    if let Err(msg) = validate_subject_name(&schedule_data.subject_name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_schedule_times(
        schedule_data.period,
        schedule_data.start_time,
        schedule_data.end_time,
        schedule_data.repeat_type.unwrap_or(RepeatType::Weekly),
        schedule_data.specific_date,
    ) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.create_schedule(teacher.id, schedule_data).await {
        Ok(schedule) => {
            tracing::info!(
                "Schedule {} created for teacher {}: {} period {}",
                schedule.id,
                teacher.id,
                schedule.day_of_week,
                schedule.period
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ScheduleResponse { schedule },
                "Schedule created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ScheduleConflict)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 冲突检查排除自身
pub async fn update_schedule(
    service: &ScheduleService,
    schedule_id: i64,
    update_data: UpdateScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teacher = match current_teacher(&storage, request).await {
        Ok(teacher) => teacher,
        Err(response) => return Ok(response),
    };

    let existing = match storage.get_schedule_by_id(schedule_id).await {
        Ok(Some(schedule)) => schedule,
        Ok(None) => return Ok(not_found(ErrorCode::ScheduleNotFound, "Schedule not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };
    if let Err(e) = ensure_owner(&existing, &teacher) {
        return Ok(error_response(&e, Some(ErrorCode::SchedulePermissionDenied)));
    }

    if let Some(ref name) = update_data.subject_name
        && let Err(msg) = validate_subject_name(name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_schedule_times(
        update_data.period.unwrap_or(existing.period),
        update_data.start_time.unwrap_or(existing.start_time),
        update_data.end_time.unwrap_or(existing.end_time),
        update_data.repeat_type.unwrap_or(existing.repeat_type),
        update_data.specific_date.or(existing.specific_date),
    ) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.update_schedule(schedule_id, update_data).await {
        Ok(Some(schedule)) => {
            tracing::info!("Schedule {} updated", schedule_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ScheduleResponse { schedule },
                "Schedule updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::ScheduleNotFound, "Schedule not found")),
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ScheduleConflict)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_schedule(
    service: &ScheduleService,
    schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teacher = match current_teacher(&storage, request).await {
        Ok(teacher) => teacher,
        Err(response) => return Ok(response),
    };

    let existing = match storage.get_schedule_by_id(schedule_id).await {
        Ok(Some(schedule)) => schedule,
        Ok(None) => return Ok(not_found(ErrorCode::ScheduleNotFound, "Schedule not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };
    if let Err(e) = ensure_owner(&existing, &teacher) {
        return Ok(error_response(&e, Some(ErrorCode::SchedulePermissionDenied)));
    }

    match storage.delete_schedule(schedule_id).await {
        Ok(true) => {
            tracing::info!("Schedule {} deleted", schedule_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Schedule deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::ScheduleNotFound, "Schedule not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
