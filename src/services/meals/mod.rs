pub mod manage;
pub mod query;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::meals::requests::{
    CreateMealRequest, DailyMealParams, MonthlyMealParams, UpdateMealRequest,
};
use crate::storage::Storage;

pub struct MealService {
    storage: Option<Arc<dyn Storage>>,
}

impl MealService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn monthly_meals(
        &self,
        query: MonthlyMealParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::monthly_meals(self, query, request).await
    }

    pub async fn daily_meals(
        &self,
        query: DailyMealParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::daily_meals(self, query, request).await
    }

    pub async fn get_meal(&self, meal_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        query::get_meal(self, meal_id, request).await
    }

    pub async fn create_meal(
        &self,
        meal_data: CreateMealRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_meal(self, meal_data, request).await
    }

    pub async fn update_meal(
        &self,
        meal_id: i64,
        update_data: UpdateMealRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_meal(self, meal_id, update_data, request).await
    }

    pub async fn delete_meal(&self, meal_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::delete_meal(self, meal_id, request).await
    }
}
