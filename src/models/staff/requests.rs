use serde::Deserialize;
use ts_rs::TS;

use super::entities::{StaffSearchType, StaffStatus};
use crate::models::common::PaginationQuery;
use crate::models::teachers::entities::EmploymentType;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search_type: Option<StaffSearchType>,
    pub keyword: Option<String>,
    pub status: Option<StaffStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct CreateStaffRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub code: String,
    pub job_title: Option<String>,
    pub work_location: Option<String>,
    pub employment_type: Option<EmploymentType>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub code: Option<String>,
    pub job_title: Option<String>,
    pub work_location: Option<String>,
    pub status: Option<StaffStatus>,
    pub employment_type: Option<EmploymentType>,
}

#[derive(Debug, Clone, Default)]
pub struct StaffListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search_type: Option<StaffSearchType>,
    pub keyword: Option<String>,
    pub status: Option<StaffStatus>,
}
