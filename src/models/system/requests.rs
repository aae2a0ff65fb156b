use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct UpdateSystemSettingRequest {
    pub current_school_year: i32,
    pub current_semester: i32,
}
