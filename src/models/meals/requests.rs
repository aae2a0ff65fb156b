use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{MealTargetType, MealType};

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meal.ts")]
pub struct MonthlyMealParams {
    pub year: i32,
    pub month: u32,
    pub target_type: Option<MealTargetType>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meal.ts")]
pub struct DailyMealParams {
    pub date: NaiveDate,
    pub target_type: Option<MealTargetType>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meal.ts")]
pub struct CreateMealRequest {
    pub meal_date: NaiveDate,
    pub target_type: MealTargetType,
    pub meal_type: MealType,
    pub menu: String,
    pub calories: Option<f64>,
    pub allergy_info: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meal.ts")]
pub struct UpdateMealRequest {
    pub meal_date: Option<NaiveDate>,
    pub target_type: Option<MealTargetType>,
    pub meal_type: Option<MealType>,
    pub menu: Option<String>,
    pub calories: Option<f64>,
    pub allergy_info: Option<String>,
}
