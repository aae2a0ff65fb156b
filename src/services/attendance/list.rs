use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use super::{AttendanceService, check_range};
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::DateRangeParams, responses::AttendanceListResponse},
};
use crate::services::{bad_request, current_user, error_response, not_found};

pub async fn list_student_attendance(
    service: &AttendanceService,
    student_id: i64,
    range: DateRangeParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = check_range(&range) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage
        .list_student_attendance(student_id, range.start_date, range.end_date)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceListResponse { items },
            "Attendance list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 学生本人的出勤记录
pub async fn list_my_attendance(
    service: &AttendanceService,
    range: DateRangeParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let student = match storage.get_student_by_user_id(user.id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::StudentNotFound,
                "Student information not found for current user",
            ));
        }
        Err(e) => return Ok(error_response(&e, None)),
    };

    list_student_attendance(service, student.id, range, request).await
}

pub async fn list_classroom_attendance(
    service: &AttendanceService,
    classroom_id: i64,
    date: NaiveDate,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_classroom_attendance(classroom_id, date).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceListResponse { items },
            "Attendance list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}
