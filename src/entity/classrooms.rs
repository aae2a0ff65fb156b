//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_year: i32,
    pub grade: i32,
    pub class_num: i32,
    pub homeroom_teacher_id: Option<i64>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher_infos::Entity",
        from = "Column::HomeroomTeacherId",
        to = "super::teacher_infos::Column::Id"
    )]
    HomeroomTeacher,
    #[sea_orm(has_many = "super::student_assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::classroom_histories::Entity")]
    Histories,
}

impl Related<super::teacher_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HomeroomTeacher.def()
    }
}

impl Related<super::student_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::classroom_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Histories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_classroom(
        self,
        homeroom_teacher_name: Option<String>,
        student_count: i64,
    ) -> crate::models::classrooms::entities::Classroom {
        use crate::models::classrooms::entities::{
            Classroom, ClassroomStatus, classroom_display_name,
        };

        Classroom {
            id: self.id,
            school_year: self.school_year,
            grade: self.grade,
            class_num: self.class_num,
            name: classroom_display_name(self.grade, self.class_num),
            homeroom_teacher_id: self.homeroom_teacher_id,
            homeroom_teacher_name,
            status: self
                .status
                .parse::<ClassroomStatus>()
                .unwrap_or(ClassroomStatus::Active),
            student_count,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
