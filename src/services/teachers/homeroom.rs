use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{
        requests::AvailableHomeroomParams,
        responses::{AvailableHomeroomResponse, MyClassResponse},
    },
};
use crate::services::{current_setting, current_user, error_response, not_found};

/// 指定学年尚未担任班主任的在职教师，未指定学年时取当前学年
pub async fn list_available_homeroom(
    service: &TeacherService,
    query: AvailableHomeroomParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let school_year = match query.school_year {
        Some(year) if year > 0 => year,
        _ => match current_setting(&storage).await {
            Ok(setting) => setting.current_school_year,
            Err(e) => return Ok(error_response(&e, None)),
        },
    };

    match storage.list_available_homeroom_teachers(school_year).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AvailableHomeroomResponse { school_year, items },
            "Available homeroom teachers retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 当前学年本人担任的班级及学生名单
pub async fn my_class(service: &TeacherService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let teacher = match storage.get_teacher_by_user_id(user.id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::TeacherNotFound,
                "Teacher information not found for current user",
            ));
        }
        Err(e) => return Ok(error_response(&e, None)),
    };

    let setting = match current_setting(&storage).await {
        Ok(setting) => setting,
        Err(e) => return Ok(error_response(&e, None)),
    };

    let classroom = match storage
        .find_homeroom_classroom(teacher.id, setting.current_school_year)
        .await
    {
        Ok(classroom) => classroom,
        Err(e) => return Ok(error_response(&e, None)),
    };

    let students = match classroom {
        Some(ref classroom) => match storage.list_classroom_students(classroom.id).await {
            Ok(students) => students,
            Err(e) => return Ok(error_response(&e, None)),
        },
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MyClassResponse {
            classroom,
            students,
        },
        "Homeroom class retrieved successfully",
    )))
}
