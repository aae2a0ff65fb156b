pub mod list;
pub mod record;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::models::attendance::requests::{
    BulkAttendanceRequest, DateRangeParams, RecordAttendanceRequest,
};
use crate::storage::Storage;

/// 单次查询允许的最长区间（天）
const MAX_RANGE_DAYS: i64 = 366;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn record_attendance(
        &self,
        record_data: RecordAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_attendance(self, record_data, request).await
    }

    pub async fn bulk_record(
        &self,
        bulk_data: BulkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::bulk_record(self, bulk_data, request).await
    }

    pub async fn delete_attendance(
        &self,
        attendance_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::delete_attendance(self, attendance_id, request).await
    }

    pub async fn list_student_attendance(
        &self,
        student_id: i64,
        range: DateRangeParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_student_attendance(self, student_id, range, request).await
    }

    pub async fn list_my_attendance(
        &self,
        range: DateRangeParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_my_attendance(self, range, request).await
    }

    pub async fn list_classroom_attendance(
        &self,
        classroom_id: i64,
        date: NaiveDate,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_classroom_attendance(self, classroom_id, date, request).await
    }

    pub async fn student_summary(
        &self,
        student_id: i64,
        range: DateRangeParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::student_summary(self, student_id, range, request).await
    }
}

/// 区间校验：结束日期不早于开始日期，且不超过一年
pub(crate) fn check_range(range: &DateRangeParams) -> Result<(), &'static str> {
    if range.end_date < range.start_date {
        return Err("End date must not be before start date");
    }
    if (range.end_date - range.start_date).num_days() > MAX_RANGE_DAYS {
        return Err("Date range must not exceed one year");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> DateRangeParams {
        DateRangeParams {
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
        }
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(&range("2024-03-01", "2024-03-31")).is_ok());
        assert!(check_range(&range("2024-03-01", "2024-03-01")).is_ok());
        assert!(check_range(&range("2024-03-02", "2024-03-01")).is_err());
        assert!(check_range(&range("2023-01-01", "2024-12-31")).is_err());
    }
}
