//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_info_id: i64,
    pub subject_code: String,
    pub test_type: String,
    pub semester: i32,
    pub grade_year: i32,
    pub score: f64,
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
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectCode",
        to = "super::subjects::Column::Code"
    )]
    Subject,
}

impl Related<super::student_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade(
        self,
        student_name: String,
        subject_name: String,
    ) -> crate::models::grades::entities::Grade {
        use crate::models::grades::entities::{Grade, TestType};

        Grade {
            id: self.id,
            student_id: self.student_info_id,
            student_name,
            subject_code: self.subject_code,
            subject_name,
            test_type: self
                .test_type
                .parse::<TestType>()
                .unwrap_or(TestType::MidtermTest),
            semester: self.semester,
            grade_year: self.grade_year,
            score: self.score,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
