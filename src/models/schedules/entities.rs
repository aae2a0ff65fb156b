use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 上课日（仅工作日）
    pub enum DayOfWeek => "../frontend/src/types/generated/schedule.ts" {
        Monday = ("MONDAY", "월"),
        Tuesday = ("TUESDAY", "화"),
        Wednesday = ("WEDNESDAY", "수"),
        Thursday = ("THURSDAY", "목"),
        Friday = ("FRIDAY", "금"),
    }
}

impl DayOfWeek {
    /// 周末返回 None
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(DayOfWeek::Monday),
            Weekday::Tue => Some(DayOfWeek::Tuesday),
            Weekday::Wed => Some(DayOfWeek::Wednesday),
            Weekday::Thu => Some(DayOfWeek::Thursday),
            Weekday::Fri => Some(DayOfWeek::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

define_string_enum! {
    pub enum RepeatType => "../frontend/src/types/generated/schedule.ts" {
        Weekly = ("WEEKLY", "매주"),
        Biweekly = ("BIWEEKLY", "격주"),
        Once = ("ONCE", "1회"),
    }
}

impl RepeatType {
    pub fn is_recurring(&self) -> bool {
        !matches!(self, RepeatType::Once)
    }
}

// 教师课表
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct TeacherSchedule {
    pub id: i64,
    pub teacher_id: i64,
    pub day_of_week: DayOfWeek,
    pub period: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject_name: String,
    pub class_name: Option<String>,
    pub location: Option<String>,
    pub repeat_type: RepeatType,
    pub specific_date: Option<NaiveDate>,
    pub memo: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 校验课表时间字段
pub fn validate_schedule_times(
    period: i32,
    start_time: NaiveTime,
    end_time: NaiveTime,
    repeat_type: RepeatType,
    specific_date: Option<NaiveDate>,
) -> Result<(), &'static str> {
    if period < 1 {
        return Err("Period must be a positive number");
    }
    if start_time >= end_time {
        return Err("Start time must be earlier than end time");
    }
    if repeat_type == RepeatType::Once && specific_date.is_none() {
        return Err("A one-time schedule requires a specific date");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[test]
    fn test_weekend_has_no_day() {
        assert_eq!(DayOfWeek::from_weekday(Weekday::Wed), Some(DayOfWeek::Wednesday));
        assert_eq!(DayOfWeek::from_weekday(Weekday::Sat), None);
        assert_eq!(DayOfWeek::from_weekday(Weekday::Sun), None);
    }

    #[test]
    fn test_validate_times() {
        assert!(validate_schedule_times(1, t(9, 0), t(9, 45), RepeatType::Weekly, None).is_ok());
        assert!(validate_schedule_times(1, t(9, 45), t(9, 0), RepeatType::Weekly, None).is_err());
        assert!(validate_schedule_times(1, t(9, 0), t(9, 0), RepeatType::Weekly, None).is_err());
        assert!(validate_schedule_times(0, t(9, 0), t(9, 45), RepeatType::Weekly, None).is_err());
    }

    #[test]
    fn test_once_requires_date() {
        assert!(validate_schedule_times(2, t(10, 0), t(10, 45), RepeatType::Once, None).is_err());
        let date = NaiveDate::from_ymd_opt(2025, 5, 7);
        assert!(validate_schedule_times(2, t(10, 0), t(10, 45), RepeatType::Once, date).is_ok());
        assert!(!RepeatType::Once.is_recurring());
        assert!(RepeatType::Biweekly.is_recurring());
    }
}
