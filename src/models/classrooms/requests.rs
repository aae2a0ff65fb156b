use serde::Deserialize;
use ts_rs::TS;

use super::entities::ClassroomStatus;
use crate::models::common::{PaginationQuery, deserialize_optional_from_str};

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub school_year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub grade: Option<i32>,
    pub status: Option<ClassroomStatus>,
}

/// 新建班级，可同时指定班主任、学生或随机分配人数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct CreateClassroomRequest {
    pub school_year: i32,
    pub grade: i32,
    pub class_num: i32,
    pub homeroom_teacher_id: Option<i64>,
    pub student_ids: Option<Vec<i64>>,
    pub random_count: Option<u32>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct UpdateClassroomRequest {
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub status: Option<ClassroomStatus>,
    pub homeroom_teacher_id: Option<i64>,
    // 为 true 时解除班主任
    #[serde(default)]
    pub clear_homeroom_teacher: bool,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomStudentsRequest {
    pub student_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct RandomAssignRequest {
    pub count: u32,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct TransferStudentRequest {
    pub student_id: i64,
    pub target_classroom_id: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct BulkStatusRequest {
    pub classroom_ids: Vec<i64>,
    pub status: ClassroomStatus,
}

#[derive(Debug, Clone, Default)]
pub struct ClassroomListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub school_year: Option<i32>,
    pub grade: Option<i32>,
    pub status: Option<ClassroomStatus>,
}

/// 存储层使用的新建参数
#[derive(Debug, Clone)]
pub struct NewClassroom {
    pub school_year: i32,
    pub grade: i32,
    pub class_num: i32,
    pub homeroom_teacher_id: Option<i64>,
}

/// CSV 导入的一行：按学年、年级、班号查找或新建班级
#[derive(Debug, Clone)]
pub struct ClassroomImportRow {
    pub school_year: i32,
    pub grade: i32,
    pub class_num: i32,
    pub teacher_code: Option<String>,
    pub student_codes: Vec<String>,
}
