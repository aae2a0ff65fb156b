use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学校设施
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/facility.ts")]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub is_available: bool,
    pub image_filename: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
