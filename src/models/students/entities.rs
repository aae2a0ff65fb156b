use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 学籍状态
    pub enum StudentStatus => "../frontend/src/types/generated/student.ts" {
        Enrolled = ("ENROLLED", "재학"),
        LeaveOfAbsence = ("LEAVE_OF_ABSENCE", "휴학"),
        Dropout = ("DROPOUT", "자퇴"),
        Expelled = ("EXPELLED", "퇴학"),
        Graduated = ("GRADUATED", "졸업"),
        Transferred = ("TRANSFERRED", "전학"),
    }
}

define_string_enum! {
    /// 性别
    pub enum Gender => "../frontend/src/types/generated/student.ts" {
        Male = ("MALE", "남"),
        Female = ("FEMALE", "여"),
    }
}

define_string_enum! {
    /// 学生检索字段
    pub enum StudentSearchType => "../frontend/src/types/generated/student.ts" {
        Name = ("NAME", "이름"),
        Email = ("EMAIL", "이메일"),
        Code = ("CODE", "학번"),
    }
}

/// 某一学年的分班信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentAssignment {
    pub id: i64,
    pub student_id: i64,
    pub school_year: i32,
    pub classroom_id: i64,
    pub grade: i32,
    pub class_num: i32,
    pub attendance_num: Option<i32>,
}

// 学生实体（用户账号 + 学籍信息 + 最近一次分班）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: StudentStatus,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub basic_habits: Option<String>,
    pub special_notes: Option<String>,
    pub assignment: Option<StudentAssignment>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn is_enrolled(&self) -> bool {
        self.status == StudentStatus::Enrolled
    }
}
