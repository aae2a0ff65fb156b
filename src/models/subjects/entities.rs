use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目实体，科目代码为主键
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub code: String,
    pub name: String,
    pub grade: i32,
    pub credits: Option<i32>,
    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
