use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{DayOfWeek, RepeatType};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct CreateScheduleRequest {
    pub day_of_week: DayOfWeek,
    pub period: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject_name: String,
    pub class_name: Option<String>,
    pub location: Option<String>,
    pub repeat_type: Option<RepeatType>,
    pub specific_date: Option<NaiveDate>,
    pub memo: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct UpdateScheduleRequest {
    pub day_of_week: Option<DayOfWeek>,
    pub period: Option<i32>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub subject_name: Option<String>,
    pub class_name: Option<String>,
    pub location: Option<String>,
    pub repeat_type: Option<RepeatType>,
    pub specific_date: Option<NaiveDate>,
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleDayParams {
    pub day_of_week: DayOfWeek,
}
