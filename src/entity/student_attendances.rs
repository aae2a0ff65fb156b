//! 出勤实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_attendances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_info_id: i64,
    pub attendance_date: Date,
    pub status: String,
    pub check_in_time: Option<Time>,
    pub reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_infos::Entity",
        from = "Column::StudentInfoId",
        to = "super::student_infos::Column::Id"
    )]
    Student,
}

impl Related<super::student_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attendance(
        self,
        student_name: String,
    ) -> crate::models::attendance::entities::Attendance {
        use crate::models::attendance::entities::{Attendance, AttendanceStatus};

        Attendance {
            id: self.id,
            student_id: self.student_info_id,
            student_name,
            attendance_date: self.attendance_date,
            status: self
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Present),
            check_in_time: self.check_in_time,
            reason: self.reason,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
