use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;
use crate::models::teachers::entities::EmploymentType;

define_string_enum! {
    pub enum StaffStatus => "../frontend/src/types/generated/staff.ts" {
        Employed = ("EMPLOYED", "재직"),
        Leave = ("LEAVE", "휴직"),
        Retired = ("RETIRED", "퇴직"),
        Dispatched = ("DISPATCHED", "파견"),
        Suspended = ("SUSPENDED", "정직"),
    }
}

define_string_enum! {
    pub enum StaffSearchType => "../frontend/src/types/generated/staff.ts" {
        Name = ("NAME", "이름"),
        Email = ("EMAIL", "이메일"),
        Code = ("CODE", "사번"),
        JobTitle = ("JOB_TITLE", "직무"),
    }
}

// 职员实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct Staff {
    pub id: i64,
    pub user_id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub work_location: Option<String>,
    pub status: StaffStatus,
    pub employment_type: EmploymentType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
