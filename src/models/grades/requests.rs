use serde::Deserialize;
use ts_rs::TS;

use super::entities::TestType;

/// 成绩查询条件，全部为空时返回所有成绩
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    pub student_id: Option<i64>,
    pub subject_code: Option<String>,
    pub semester: Option<i32>,
    pub grade_year: Option<i32>,
}

// 录入成绩，相同学生/科目/考试类型/学期/学年时覆盖分数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct InputGradeRequest {
    pub student_id: i64,
    pub subject_code: String,
    pub test_type: TestType,
    pub semester: i32,
    pub grade_year: i32,
    pub score: f64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub score: f64,
}
