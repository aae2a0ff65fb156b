use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 供餐对象
    pub enum MealTargetType => "../frontend/src/types/generated/meal.ts" {
        All = ("ALL", "전체"),
        Student = ("STUDENT", "학생"),
        Staff = ("STAFF", "교직원"),
    }
}

define_string_enum! {
    /// 餐次，声明顺序即展示顺序
    pub enum MealType => "../frontend/src/types/generated/meal.ts" {
        Breakfast = ("BREAKFAST", "조식"),
        Lunch = ("LUNCH", "중식"),
        Dinner = ("DINNER", "석식"),
    }
}

// 食谱
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meal.ts")]
pub struct Meal {
    pub id: i64,
    pub meal_date: NaiveDate,
    pub target_type: MealTargetType,
    pub meal_type: MealType,
    pub menu: String,
    pub calories: Option<f64>,
    pub allergy_info: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 按日期、餐次排序
pub fn sort_meals(meals: &mut [Meal]) {
    meals.sort_by(|a, b| {
        a.meal_date
            .cmp(&b.meal_date)
            .then_with(|| a.meal_type.cmp(&b.meal_type))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(day: u32, meal_type: MealType) -> Meal {
        let now = chrono::Utc::now();
        Meal {
            id: 0,
            meal_date: NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date"),
            target_type: MealTargetType::All,
            meal_type,
            menu: String::new(),
            calories: None,
            allergy_info: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_sort_by_date_then_meal_type() {
        let mut meals = vec![
            meal(4, MealType::Breakfast),
            meal(3, MealType::Dinner),
            meal(3, MealType::Breakfast),
            meal(3, MealType::Lunch),
        ];
        sort_meals(&mut meals);
        let order: Vec<_> = meals.iter().map(|m| (m.meal_date.to_string(), m.meal_type)).collect();
        assert_eq!(
            order,
            vec![
                ("2025-03-03".to_string(), MealType::Breakfast),
                ("2025-03-03".to_string(), MealType::Lunch),
                ("2025-03-03".to_string(), MealType::Dinner),
                ("2025-03-04".to_string(), MealType::Breakfast),
            ]
        );
    }
}
