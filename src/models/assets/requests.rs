use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::AssetStatus;
use crate::models::common::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/asset.ts")]
pub struct AssetListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub status: Option<AssetStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/asset.ts")]
pub struct CreateAssetRequest {
    pub name: String,
    pub code: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_filename: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/asset.ts")]
pub struct UpdateAssetRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_filename: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/asset.ts")]
pub struct AssetStatusRequest {
    pub status: AssetStatus,
}

#[derive(Debug, Clone, Default)]
pub struct AssetListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub status: Option<AssetStatus>,
}
