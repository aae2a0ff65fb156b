//! 食谱实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school_meals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub meal_date: Date,
    pub target_type: String,
    pub meal_type: String,
    pub menu: String,
    pub calories: Option<f64>,
    pub allergy_info: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_meal(self) -> crate::models::meals::entities::Meal {
        use crate::models::meals::entities::{Meal, MealTargetType, MealType};

        Meal {
            id: self.id,
            meal_date: self.meal_date,
            target_type: self
                .target_type
                .parse::<MealTargetType>()
                .unwrap_or(MealTargetType::All),
            meal_type: self
                .meal_type
                .parse::<MealType>()
                .unwrap_or(MealType::Lunch),
            menu: self.menu,
            calories: self.calories,
            allergy_info: self.allergy_info,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
