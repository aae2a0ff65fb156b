use serde::Serialize;
use ts_rs::TS;

use super::entities::{Parent, ParentChild};
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentResponse {
    pub parent: Parent,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentListResponse {
    pub items: Vec<Parent>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ChildrenResponse {
    pub items: Vec<ParentChild>,
}
