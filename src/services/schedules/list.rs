use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScheduleService, current_teacher};
use crate::errors::Result;
use crate::models::{
    ApiResponse,
    schedules::{
        entities::{DayOfWeek, TeacherSchedule},
        responses::ScheduleListResponse,
    },
};
use crate::services::error_response;

fn list_response(result: Result<Vec<TeacherSchedule>>) -> HttpResponse {
    match result {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success(
            ScheduleListResponse { items },
            "Schedules retrieved successfully",
        )),
        Err(e) => error_response(&e, None),
    }
}

/// 今天的课表：周末为空，包含周期课表和今天的单次课表
pub async fn today_schedules(
    service: &ScheduleService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teacher = match current_teacher(&storage, request).await {
        Ok(teacher) => teacher,
        Err(response) => return Ok(response),
    };

    let today = crate::services::calendar::today();
    Ok(list_response(
        storage.list_schedules_on_date(teacher.id, today).await,
    ))
}

pub async fn all_schedules(
    service: &ScheduleService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teacher = match current_teacher(&storage, request).await {
        Ok(teacher) => teacher,
        Err(response) => return Ok(response),
    };

    Ok(list_response(storage.list_schedules(teacher.id).await))
}

pub async fn schedules_by_day(
    service: &ScheduleService,
    day: DayOfWeek,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teacher = match current_teacher(&storage, request).await {
        Ok(teacher) => teacher,
        Err(response) => return Ok(response),
    };

    Ok(list_response(
        storage.list_schedules_by_day(teacher.id, day).await,
    ))
}
