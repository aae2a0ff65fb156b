use serde::Serialize;
use ts_rs::TS;

use super::entities::Facility;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/facility.ts")]
pub struct FacilityResponse {
    pub facility: Facility,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/facility.ts")]
pub struct FacilityListResponse {
    pub items: Vec<Facility>,
    pub pagination: PaginationInfo,
}
