use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::EventType;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct MonthlyEventParams {
    pub year: i32,
    pub month: u32,
    pub grade: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct EventRangeParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub grade: Option<i32>,
    pub event_type: Option<EventType>,
}

/// 日历组件拉取区间 [start, end)
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct EventFeedParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct UpcomingEventParams {
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CreateEventRequest {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub event_type: EventType,
    pub target_grade: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub event_type: Option<EventType>,
    pub target_grade: Option<i32>,
    pub description: Option<String>,
    // 为 true 时清空结束日期（单日日程）
    #[serde(default)]
    pub clear_end_date: bool,
    // 为 true 时改为全校日程
    #[serde(default)]
    pub clear_target_grade: bool,
}
