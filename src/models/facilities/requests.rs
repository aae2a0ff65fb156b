use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::{PaginationQuery, deserialize_optional_from_str};

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/facility.ts")]
pub struct FacilityListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/facility.ts")]
pub struct CreateFacilityRequest {
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
    pub image_filename: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/facility.ts")]
pub struct UpdateFacilityRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
    pub image_filename: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FacilityListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_available: Option<bool>,
}
