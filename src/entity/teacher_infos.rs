//! 教师信息实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_infos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub subject: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub status: String,
    pub employment_type: String,
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
    #[sea_orm(has_many = "super::teacher_schedules::Entity")]
    Schedules,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::teacher_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(
        self,
        user: &super::users::Model,
    ) -> crate::models::teachers::entities::Teacher {
        use crate::models::teachers::entities::{EmploymentType, Teacher, TeacherStatus};

        Teacher {
            id: self.id,
            user_id: self.user_id,
            code: self.code,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            subject: self.subject,
            department: self.department,
            position: self.position,
            status: self
                .status
                .parse::<TeacherStatus>()
                .unwrap_or(TeacherStatus::Employed),
            employment_type: self
                .employment_type
                .parse::<EmploymentType>()
                .unwrap_or(EmploymentType::Permanent),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
