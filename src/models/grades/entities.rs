use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 考试类型
    pub enum TestType => "../frontend/src/types/generated/grade.ts" {
        MidtermTest = ("MIDTERM_TEST", "중간고사"),
        FinalTest = ("FINAL_TEST", "기말고사"),
        PerformanceAssessment = ("PERFORMANCE_ASSESSMENT", "수행평가"),
    }
}

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub subject_code: String,
    pub subject_name: String,
    pub test_type: TestType,
    pub semester: i32,
    pub grade_year: i32,
    pub score: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
