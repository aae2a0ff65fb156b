use serde::Serialize;
use ts_rs::TS;

use super::entities::TeacherSchedule;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleResponse {
    pub schedule: TeacherSchedule,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleListResponse {
    pub items: Vec<TeacherSchedule>,
}
