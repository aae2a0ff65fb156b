//! 学籍实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_infos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub status: String,
    pub birth_date: Option<Date>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub basic_habits: Option<String>,
    pub special_notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::student_assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::family_relations::Entity")]
    FamilyRelations,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::student_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::family_relations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FamilyRelations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(
        self,
        user: &super::users::Model,
        assignment: Option<crate::models::students::entities::StudentAssignment>,
    ) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Gender, Student, StudentStatus};

        Student {
            id: self.id,
            user_id: self.user_id,
            code: self.code,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Enrolled),
            birth_date: self.birth_date,
            gender: self.gender.and_then(|g| g.parse::<Gender>().ok()),
            address: self.address,
            basic_habits: self.basic_habits,
            special_notes: self.special_notes,
            assignment,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
