use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceStatus;

// 记录出勤（同一学生同一天覆盖）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordAttendanceRequest {
    pub student_id: i64,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BulkAttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub reason: Option<String>,
}

/// 班级某一天的批量出勤
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BulkAttendanceRequest {
    pub classroom_id: i64,
    pub attendance_date: NaiveDate,
    pub records: Vec<BulkAttendanceEntry>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DateRangeParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct ClassroomAttendanceParams {
    pub date: NaiveDate,
}
