use serde::Serialize;
use ts_rs::TS;

use super::entities::{Classroom, ClassroomHistory, ClassroomStudent};
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomResponse {
    pub classroom: Classroom,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListResponse {
    pub items: Vec<Classroom>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomDetailResponse {
    pub classroom: Classroom,
    pub students: Vec<ClassroomStudent>,
    pub histories: Vec<ClassroomHistory>,
}

/// 学生分配结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomAssignResult {
    // 新分配
    pub assigned: usize,
    // 从同学年其他班级移入
    pub moved: usize,
    // 已在本班，跳过
    pub skipped: usize,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct BulkStatusResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct RemoveStudentsResponse {
    pub removed: u64,
}

/// 班级 CSV 导入结果
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomImportResult {
    // 处理的班级数
    pub classrooms: usize,
    // 其中新建的班级数
    pub created: usize,
    pub assigned: usize,
    pub moved: usize,
    pub skipped: usize,
    // 找不到的学号
    pub unknown_student_codes: Vec<String>,
}
