use serde::Serialize;
use ts_rs::TS;

use super::entities::Asset;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/asset.ts")]
pub struct AssetResponse {
    pub asset: Asset,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/asset.ts")]
pub struct AssetListResponse {
    pub items: Vec<Asset>,
    pub pagination: PaginationInfo,
}
