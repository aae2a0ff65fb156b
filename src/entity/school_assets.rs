//! 资产实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school_assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub purchase_date: Option<Date>,
    pub description: Option<String>,
    pub image_filename: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_asset(self) -> crate::models::assets::entities::Asset {
        use crate::models::assets::entities::{Asset, AssetStatus};

        Asset {
            id: self.id,
            name: self.name,
            code: self.code,
            category: self.category,
            location: self.location,
            status: self
                .status
                .parse::<AssetStatus>()
                .unwrap_or(AssetStatus::Available),
            purchase_date: self.purchase_date,
            description: self.description,
            image_filename: self.image_filename,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
