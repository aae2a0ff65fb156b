//! 设施实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school_facilities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub is_available: bool,
    pub image_filename: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_facility(self) -> crate::models::facilities::entities::Facility {
        crate::models::facilities::entities::Facility {
            id: self.id,
            name: self.name,
            location: self.location,
            capacity: self.capacity,
            description: self.description,
            is_available: self.is_available,
            image_filename: self.image_filename,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
