use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;
use crate::utils::date::{days_until, format_date_range};

define_string_enum! {
    /// 学事日程类型
    pub enum EventType => "../frontend/src/types/generated/calendar.ts" {
        Academic = ("ACADEMIC", "학사"),
        Holiday = ("HOLIDAY", "휴일"),
        Exam = ("EXAM", "시험"),
        Event = ("EVENT", "행사"),
        Etc = ("ETC", "기타"),
    }
}

impl EventType {
    /// 日历显示颜色
    pub fn color(&self) -> &'static str {
        match self {
            EventType::Academic => "#4e73df",
            EventType::Holiday => "#e74a3b",
            EventType::Exam => "#f6c23e",
            EventType::Event => "#1cc88a",
            EventType::Etc => "#858796",
        }
    }
}

// 学事日程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub event_type: EventType,
    pub target_grade: Option<i32>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 返回给前端的日程（附带 D-day 与日期文本）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarEventView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub event: CalendarEvent,
    pub event_type_label: String,
    pub color: String,
    pub d_day: i64,
    pub date_range_text: String,
}

impl CalendarEvent {
    pub fn into_view(self, today: NaiveDate) -> CalendarEventView {
        let d_day = days_until(self.start_date, today);
        let date_range_text = format_date_range(self.start_date, self.end_date);
        CalendarEventView {
            event_type_label: self.event_type.label().to_string(),
            color: self.event_type.color().to_string(),
            d_day,
            date_range_text,
            event: self,
        }
    }
}
