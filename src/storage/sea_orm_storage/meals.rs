use chrono::NaiveDate;

use super::SeaOrmStorage;
use crate::entity::school_meals::{ActiveModel, Column, Entity as SchoolMeals};
use crate::errors::{Result, SchoolMateError};
use crate::models::meals::{
    entities::{Meal, MealTargetType, sort_meals},
    requests::{CreateMealRequest, UpdateMealRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// [first, last] 闭区间内的菜单，指定对象时严格匹配
    pub async fn list_meals_between_impl(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        target_type: Option<MealTargetType>,
    ) -> Result<Vec<Meal>> {
        let mut select = SchoolMeals::find().filter(Column::MealDate.between(first, last));
        if let Some(target_type) = target_type {
            select = select.filter(Column::TargetType.eq(target_type.as_str()));
        }

        let models = select
            .order_by_asc(Column::MealDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询菜单失败: {e}")))?;

        // 同一天按早、午、晚排序
        let mut meals: Vec<Meal> = models.into_iter().map(|m| m.into_meal()).collect();
        sort_meals(&mut meals);
        Ok(meals)
    }

    pub async fn get_meal_by_id_impl(&self, id: i64) -> Result<Option<Meal>> {
        let model = SchoolMeals::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询菜单失败: {e}")))?;
        Ok(model.map(|m| m.into_meal()))
    }

    pub async fn create_meal_impl(&self, req: CreateMealRequest) -> Result<Meal> {
        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            meal_date: Set(req.meal_date),
            target_type: Set(req.target_type.to_string()),
            meal_type: Set(req.meal_type.to_string()),
            menu: Set(req.menu),
            calories: Set(req.calories),
            allergy_info: Set(req.allergy_info),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建菜单失败: {e}")))?;
        Ok(model.into_meal())
    }

    pub async fn update_meal_impl(&self, id: i64, update: UpdateMealRequest) -> Result<Option<Meal>> {
        if self.get_meal_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(meal_date) = update.meal_date {
            model.meal_date = Set(meal_date);
        }
        if let Some(target_type) = update.target_type {
            model.target_type = Set(target_type.to_string());
        }
        if let Some(meal_type) = update.meal_type {
            model.meal_type = Set(meal_type.to_string());
        }
        if let Some(menu) = update.menu {
            model.menu = Set(menu);
        }
        if let Some(calories) = update.calories {
            model.calories = Set(Some(calories));
        }
        if let Some(allergy_info) = update.allergy_info {
            model.allergy_info = Set(Some(allergy_info));
        }

        let model = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新菜单失败: {e}")))?;
        Ok(Some(model.into_meal()))
    }

    pub async fn delete_meal_impl(&self, id: i64) -> Result<bool> {
        let result = SchoolMeals::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除菜单失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
