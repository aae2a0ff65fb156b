//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    pub grade: i32,
    pub credits: Option<i32>,
    pub teacher_info_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher_infos::Entity",
        from = "Column::TeacherInfoId",
        to = "super::teacher_infos::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
}

impl Related<super::teacher_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(
        self,
        teacher_name: Option<String>,
    ) -> crate::models::subjects::entities::Subject {
        crate::models::subjects::entities::Subject {
            code: self.code,
            name: self.name,
            grade: self.grade,
            credits: self.credits,
            teacher_id: self.teacher_info_id,
            teacher_name,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
