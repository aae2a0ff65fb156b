use serde::Serialize;
use ts_rs::TS;

use super::entities::CalendarEventView;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarEventResponse {
    pub event: CalendarEventView,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarEventListResponse {
    pub items: Vec<CalendarEventView>,
}
