use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 在职状态
    pub enum TeacherStatus => "../frontend/src/types/generated/teacher.ts" {
        Employed = ("EMPLOYED", "재직"),
        Leave = ("LEAVE", "휴직"),
        Retired = ("RETIRED", "퇴직"),
    }
}

define_string_enum! {
    /// 雇佣形式（教师和职员共用）
    pub enum EmploymentType => "../frontend/src/types/generated/teacher.ts" {
        Permanent = ("PERMANENT", "정규직"),
        IndefiniteContract = ("INDEFINITE_CONTRACT", "무기계약직"),
        FixedTerm = ("FIXED_TERM", "기간제"),
        PartTime = ("PART_TIME", "시간제"),
    }
}

define_string_enum! {
    pub enum TeacherSearchType => "../frontend/src/types/generated/teacher.ts" {
        Name = ("NAME", "이름"),
        Email = ("EMAIL", "이메일"),
        Code = ("CODE", "교번"),
        Subject = ("SUBJECT", "담당 과목"),
        Department = ("DEPARTMENT", "부서"),
    }
}

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub status: TeacherStatus,
    pub employment_type: EmploymentType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
