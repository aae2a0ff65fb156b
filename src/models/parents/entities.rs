use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 家长账号状态，自行注册的家长为 PENDING
    pub enum ParentStatus => "../frontend/src/types/generated/parent.ts" {
        Active = ("ACTIVE", "활성"),
        Inactive = ("INACTIVE", "비활성"),
        Pending = ("PENDING", "승인 대기"),
        Blocked = ("BLOCKED", "차단"),
    }
}

define_string_enum! {
    pub enum FamilyRelationship => "../frontend/src/types/generated/parent.ts" {
        Father = ("FATHER", "부"),
        Mother = ("MOTHER", "모"),
        Grandfather = ("GRANDFATHER", "조부"),
        Grandmother = ("GRANDMOTHER", "조모"),
        Other = ("OTHER", "기타"),
    }
}

define_string_enum! {
    pub enum ParentSearchType => "../frontend/src/types/generated/parent.ts" {
        Name = ("NAME", "이름"),
        Email = ("EMAIL", "이메일"),
        Phone = ("PHONE", "연락처"),
        ChildName = ("CHILD_NAME", "자녀 이름"),
    }
}

/// 家长与子女的关联
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentChild {
    pub relation_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_code: String,
    pub relationship: FamilyRelationship,
    pub is_representative: bool,
}

// 家长实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct Parent {
    pub id: i64,
    pub user_id: i64,
    pub code: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: ParentStatus,
    pub emergency_contact: Option<String>,
    pub children: Vec<ParentChild>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
