//! 学年分班实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_info_id: i64,
    pub school_year: i32,
    pub classroom_id: i64,
    pub attendance_num: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_infos::Entity",
        from = "Column::StudentInfoId",
        to = "super::student_infos::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::classrooms::Entity",
        from = "Column::ClassroomId",
        to = "super::classrooms::Column::Id"
    )]
    Classroom,
}

impl Related<super::student_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(
        self,
        classroom: Option<&super::classrooms::Model>,
    ) -> crate::models::students::entities::StudentAssignment {
        crate::models::students::entities::StudentAssignment {
            id: self.id,
            student_id: self.student_info_id,
            school_year: self.school_year,
            classroom_id: self.classroom_id,
            grade: classroom.map(|c| c.grade).unwrap_or_default(),
            class_num: classroom.map(|c| c.class_num).unwrap_or_default(),
            attendance_num: self.attendance_num,
        }
    }
}
