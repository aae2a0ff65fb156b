use serde::Serialize;
use ts_rs::TS;

use super::entities::Staff;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffResponse {
    pub staff: Staff,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffListResponse {
    pub items: Vec<Staff>,
    pub pagination: PaginationInfo,
}
