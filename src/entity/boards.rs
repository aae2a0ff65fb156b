//! 公告板实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "boards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub board_type: String,
    pub title: String,
    pub content: String,
    pub writer_id: i64,
    pub target_grade: Option<i32>,
    pub target_classroom_id: Option<i64>,
    pub view_count: i64,
    pub is_pinned: bool,
    pub is_deleted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::WriterId",
        to = "super::users::Column::Id"
    )]
    Writer,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Writer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_board(self, writer_name: String) -> crate::models::boards::entities::Board {
        use crate::models::boards::entities::{Board, BoardType};

        Board {
            id: self.id,
            board_type: self
                .board_type
                .parse::<BoardType>()
                .unwrap_or(BoardType::SchoolNotice),
            title: self.title,
            content: self.content,
            writer_id: self.writer_id,
            writer_name,
            target_grade: self.target_grade,
            target_classroom_id: self.target_classroom_id,
            view_count: self.view_count,
            is_pinned: self.is_pinned,
            is_deleted: self.is_deleted,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
