use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{
        requests::{BulkAttendanceRequest, RecordAttendanceRequest},
        responses::{AttendanceListResponse, AttendanceResponse},
    },
};
use crate::services::{bad_request, error_response, not_found};

const MAX_REASON_LEN: usize = 200;

fn check_reason(reason: Option<&str>) -> Result<(), HttpResponse> {
    match reason {
        Some(reason) if reason.chars().count() > MAX_REASON_LEN => Err(bad_request(
            ErrorCode::BadRequest,
            format!("Reason must be at most {MAX_REASON_LEN} characters"),
        )),
        _ => Ok(()),
    }
}

/// 记录出勤，同一学生同一天已有记录时覆盖
pub async fn record_attendance(
    service: &AttendanceService,
    record_data: RecordAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(response) = check_reason(record_data.reason.as_deref()) {
        return Ok(response);
    }

    match storage.record_attendance(record_data).await {
        Ok(attendance) => {
            tracing::info!(
                "Attendance recorded: student {} on {} as {}",
                attendance.student_id,
                attendance.attendance_date,
                attendance.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AttendanceResponse { attendance },
                "Attendance recorded successfully",
            )))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::StudentNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 班级某一天的批量出勤，学生必须属于该班
pub async fn bulk_record(
    service: &AttendanceService,
    bulk_data: BulkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if bulk_data.records.is_empty() {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "At least one attendance record is required",
        ));
    }
    for entry in &bulk_data.records {
        if let Err(response) = check_reason(entry.reason.as_deref()) {
            return Ok(response);
        }
    }

    let classroom_id = bulk_data.classroom_id;
    let date = bulk_data.attendance_date;
    match storage.bulk_record_attendance(bulk_data).await {
        Ok(items) => {
            tracing::info!(
                "Attendance recorded for classroom {} on {}: {} students",
                classroom_id,
                date,
                items.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AttendanceListResponse { items },
                "Attendance recorded successfully",
            )))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::ClassroomNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_attendance(
    service: &AttendanceService,
    attendance_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_attendance(attendance_id).await {
        Ok(true) => {
            tracing::info!("Attendance {} deleted", attendance_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Attendance deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}
