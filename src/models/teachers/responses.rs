use serde::Serialize;
use ts_rs::TS;

use super::entities::Teacher;
use crate::models::classrooms::entities::{Classroom, ClassroomStudent};
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherResponse {
    pub teacher: Teacher,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListResponse {
    pub items: Vec<Teacher>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct AvailableHomeroomResponse {
    pub school_year: i32,
    pub items: Vec<Teacher>,
}

/// 班主任的"我的班级"
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct MyClassResponse {
    pub classroom: Option<Classroom>,
    pub students: Vec<ClassroomStudent>,
}
