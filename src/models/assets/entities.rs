use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 资产状态
    pub enum AssetStatus => "../frontend/src/types/generated/asset.ts" {
        Available = ("AVAILABLE", "사용 가능"),
        InUse = ("IN_USE", "사용 중"),
        Broken = ("BROKEN", "고장"),
        Lost = ("LOST", "분실"),
    }
}

// 学校资产
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/asset.ts")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_filename: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
