use serde::Serialize;
use ts_rs::TS;

use super::entities::Meal;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meal.ts")]
pub struct MealResponse {
    pub meal: Meal,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meal.ts")]
pub struct MealListResponse {
    pub items: Vec<Meal>,
}
