use serde::Serialize;
use ts_rs::TS;

use super::entities::{Attendance, AttendanceSummary};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceResponse {
    pub attendance: Attendance,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<Attendance>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryResponse {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub summary: AttendanceSummary,
}
