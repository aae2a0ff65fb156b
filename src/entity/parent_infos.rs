//! 家长信息实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parent_infos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub code: Option<String>,
    pub status: String,
    pub emergency_contact: Option<String>,
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
    #[sea_orm(has_many = "super::family_relations::Entity")]
    FamilyRelations,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::family_relations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FamilyRelations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_parent(
        self,
        user: &super::users::Model,
        children: Vec<crate::models::parents::entities::ParentChild>,
    ) -> crate::models::parents::entities::Parent {
        use crate::models::parents::entities::{Parent, ParentStatus};

        Parent {
            id: self.id,
            user_id: self.user_id,
            code: self.code,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            status: self
                .status
                .parse::<ParentStatus>()
                .unwrap_or(ParentStatus::Pending),
            emergency_contact: self.emergency_contact,
            children,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
