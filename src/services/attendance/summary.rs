use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AttendanceService, check_range};
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{
        entities::{Attendance, AttendanceSummary},
        requests::DateRangeParams,
        responses::AttendanceSummaryResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};

fn summarize(student_id: i64, records: &[Attendance]) -> AttendanceSummary {
    records
        .iter()
        .fold(AttendanceSummary::new(student_id), |mut summary, record| {
            summary.add(record.status);
            summary
        })
}

/// 一段时间内各出勤状态的次数
pub async fn student_summary(
    service: &AttendanceService,
    student_id: i64,
    range: DateRangeParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = check_range(&range) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(error_response(&e, None)),
    }

    match storage
        .list_student_attendance(student_id, range.start_date, range.end_date)
        .await
    {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceSummaryResponse {
                start_date: range.start_date,
                end_date: range.end_date,
                summary: summarize(student_id, &records),
            },
            "Attendance summary retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    fn record(status: AttendanceStatus, day: u32) -> Attendance {
        Attendance {
            id: day as i64,
            student_id: 3,
            student_name: "박지호".to_string(),
            attendance_date: chrono::NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            status,
            check_in_time: None,
            reason: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_summarize() {
        let records = vec![
            record(AttendanceStatus::Present, 1),
            record(AttendanceStatus::Absent, 2),
            record(AttendanceStatus::Present, 3),
            record(AttendanceStatus::Excused, 4),
        ];
        let summary = summarize(3, &records);
        assert_eq!(summary.student_id, 3);
        assert_eq!(summary.present, 2);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.excused, 1);
        assert_eq!(summary.total, 4);

        assert_eq!(summarize(3, &[]), AttendanceSummary::new(3));
    }
}
