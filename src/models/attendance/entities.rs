use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 出勤状态
    pub enum AttendanceStatus => "../frontend/src/types/generated/attendance.ts" {
        Present = ("PRESENT", "출석"),
        Absent = ("ABSENT", "결석"),
        Late = ("LATE", "지각"),
        Excused = ("EXCUSED", "공결"),
        Sick = ("SICK", "병결"),
    }
}

// 出勤记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 某学生在一段时间内各状态的次数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummary {
    pub student_id: i64,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub excused: u32,
    pub sick: u32,
    pub total: u32,
}

impl AttendanceSummary {
    pub fn new(student_id: i64) -> Self {
        Self {
            student_id,
            ..Default::default()
        }
    }

    pub fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Excused => self.excused += 1,
            AttendanceStatus::Sick => self.sick += 1,
        }
        self.total += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = AttendanceSummary::new(7);
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Present,
            AttendanceStatus::Late,
            AttendanceStatus::Sick,
        ] {
            summary.add(status);
        }
        assert_eq!(summary.present, 2);
        assert_eq!(summary.late, 1);
        assert_eq!(summary.sick, 1);
        assert_eq!(summary.absent, 0);
        assert_eq!(summary.total, 4);
    }
}
