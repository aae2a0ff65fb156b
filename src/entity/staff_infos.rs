//! 职员信息实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff_infos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub job_title: Option<String>,
    pub work_location: Option<String>,
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
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_staff(self, user: &super::users::Model) -> crate::models::staff::entities::Staff {
        use crate::models::staff::entities::{Staff, StaffStatus};
        use crate::models::teachers::entities::EmploymentType;

        Staff {
            id: self.id,
            user_id: self.user_id,
            code: self.code,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            job_title: self.job_title,
            work_location: self.work_location,
            status: self
                .status
                .parse::<StaffStatus>()
                .unwrap_or(StaffStatus::Employed),
            employment_type: self
                .employment_type
                .parse::<EmploymentType>()
                .unwrap_or(EmploymentType::Permanent),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
