use serde::Deserialize;
use ts_rs::TS;

use super::entities::{FamilyRelationship, ParentSearchType, ParentStatus};
use crate::models::common::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search_type: Option<ParentSearchType>,
    pub keyword: Option<String>,
    pub status: Option<ParentStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct CreateParentRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub code: Option<String>,
    pub emergency_contact: Option<String>,
    pub status: Option<ParentStatus>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct UpdateParentRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub code: Option<String>,
    pub emergency_contact: Option<String>,
    pub status: Option<ParentStatus>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentStatusRequest {
    pub status: ParentStatus,
}

// 关联子女
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct LinkChildRequest {
    pub student_id: i64,
    pub relationship: FamilyRelationship,
    #[serde(default)]
    pub is_representative: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ParentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search_type: Option<ParentSearchType>,
    pub keyword: Option<String>,
    pub status: Option<ParentStatus>,
}
