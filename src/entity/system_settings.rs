//! 系统设置实体（单行）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "system_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub current_school_year: i32,
    pub current_semester: i32,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_setting(self) -> crate::models::system::entities::SystemSetting {
        crate::models::system::entities::SystemSetting {
            current_school_year: self.current_school_year,
            current_semester: self.current_semester,
            updated_at: Some(super::to_datetime(self.updated_at)),
        }
    }
}
