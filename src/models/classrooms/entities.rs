use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;
use crate::models::students::entities::StudentStatus;

define_string_enum! {
    pub enum ClassroomStatus => "../frontend/src/types/generated/classroom.ts" {
        Active = ("ACTIVE", "운영 중"),
        Finished = ("FINISHED", "종료"),
    }
}

define_string_enum! {
    /// 班级变更记录类型
    pub enum ClassroomActionType => "../frontend/src/types/generated/classroom.ts" {
        Create = ("CREATE", "학급 생성"),
        Update = ("UPDATE", "학급 수정"),
        AssignStudent = ("ASSIGN_STUDENT", "학생 배정"),
        RemoveStudent = ("REMOVE_STUDENT", "학생 제외"),
        TransferOut = ("TRANSFER_OUT", "전출"),
        TransferIn = ("TRANSFER_IN", "전입"),
    }
}

/// 班级显示名，例如 `2학년 3반`
pub fn classroom_display_name(grade: i32, class_num: i32) -> String {
    format!("{grade}학년 {class_num}반")
}

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    pub id: i64,
    pub school_year: i32,
    pub grade: i32,
    pub class_num: i32,
    pub name: String,
    pub homeroom_teacher_id: Option<i64>,
    pub homeroom_teacher_name: Option<String>,
    pub status: ClassroomStatus,
    pub student_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 班级中的学生（按学号排序展示）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomStudent {
    pub assignment_id: i64,
    pub student_id: i64,
    pub attendance_num: Option<i32>,
    pub name: String,
    pub code: String,
    pub status: StudentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomHistory {
    pub id: i64,
    pub classroom_id: i64,
    pub action_type: ClassroomActionType,
    pub description: String,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 学生排序：有编号的在前并按编号升序，其次按姓名
pub fn sort_roster(students: &mut [ClassroomStudent]) {
    students.sort_by(|a, b| match (a.attendance_num, b.attendance_num) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(num: Option<i32>, name: &str) -> ClassroomStudent {
        ClassroomStudent {
            assignment_id: 0,
            student_id: 0,
            attendance_num: num,
            name: name.to_string(),
            code: String::new(),
            status: StudentStatus::Enrolled,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(classroom_display_name(2, 3), "2학년 3반");
    }

    #[test]
    fn test_sort_roster() {
        let mut list = vec![
            student(None, "나"),
            student(Some(2), "다"),
            student(None, "가"),
            student(Some(1), "라"),
        ];
        sort_roster(&mut list);
        let names: Vec<_> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["라", "다", "가", "나"]);
    }
}
