use serde::Deserialize;
use ts_rs::TS;

use super::entities::{EmploymentType, TeacherSearchType, TeacherStatus};
use crate::models::common::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search_type: Option<TeacherSearchType>,
    pub keyword: Option<String>,
    pub status: Option<TeacherStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub code: String,
    pub subject: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub employment_type: Option<EmploymentType>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub code: Option<String>,
    pub subject: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub status: Option<TeacherStatus>,
    pub employment_type: Option<EmploymentType>,
}

// 可担任班主任的教师查询
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct AvailableHomeroomParams {
    pub school_year: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search_type: Option<TeacherSearchType>,
    pub keyword: Option<String>,
    pub status: Option<TeacherStatus>,
}
