//! 家庭关系实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "family_relations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_info_id: i64,
    pub parent_info_id: i64,
    pub relationship: String,
    pub is_representative: bool,
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
        belongs_to = "super::parent_infos::Entity",
        from = "Column::ParentInfoId",
        to = "super::parent_infos::Column::Id"
    )]
    Parent,
}

impl Related<super::student_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::parent_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_child(
        self,
        student: &super::student_infos::Model,
        student_user: &super::users::Model,
    ) -> crate::models::parents::entities::ParentChild {
        use crate::models::parents::entities::{FamilyRelationship, ParentChild};

        ParentChild {
            relation_id: self.id,
            student_id: self.student_info_id,
            student_name: student_user.name.clone(),
            student_code: student.code.clone(),
            relationship: self
                .relationship
                .parse::<FamilyRelationship>()
                .unwrap_or(FamilyRelationship::Other),
            is_representative: self.is_representative,
        }
    }
}
