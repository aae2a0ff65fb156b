//! 班级变更记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classroom_histories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub classroom_id: i64,
    pub action_type: String,
    pub description: String,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classrooms::Entity",
        from = "Column::ClassroomId",
        to = "super::classrooms::Column::Id"
    )]
    Classroom,
}

impl Related<super::classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_history(self) -> crate::models::classrooms::entities::ClassroomHistory {
        use crate::models::classrooms::entities::{ClassroomActionType, ClassroomHistory};

        ClassroomHistory {
            id: self.id,
            classroom_id: self.classroom_id,
            action_type: self
                .action_type
                .parse::<ClassroomActionType>()
                .unwrap_or(ClassroomActionType::Update),
            description: self.description,
            created_by: self.created_by,
            created_at: super::to_datetime(self.created_at),
        }
    }
}
