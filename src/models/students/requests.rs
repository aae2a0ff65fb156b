use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{Gender, StudentSearchType, StudentStatus};
use crate::models::common::PaginationQuery;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search_type: Option<StudentSearchType>,
    pub keyword: Option<String>,
    pub status: Option<StudentStatus>,
}

/// 新建学生：同时创建账号、学籍，可选地分配到某个班级
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub code: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub basic_habits: Option<String>,
    pub special_notes: Option<String>,
    pub school_year: Option<i32>,
    pub classroom_id: Option<i64>,
    pub attendance_num: Option<i32>,
}

// 学生信息更新请求
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub code: Option<String>,
    pub status: Option<StudentStatus>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub basic_habits: Option<String>,
    pub special_notes: Option<String>,
}

// 新增学年分班
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateAssignmentRequest {
    pub school_year: i32,
    pub classroom_id: i64,
    pub attendance_num: Option<i32>,
}

// 修改学年分班
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateAssignmentRequest {
    pub classroom_id: Option<i64>,
    pub attendance_num: Option<i32>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search_type: Option<StudentSearchType>,
    pub keyword: Option<String>,
    pub status: Option<StudentStatus>,
}
