use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MealService;
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    meals::{
        entities::Meal,
        requests::{DailyMealParams, MonthlyMealParams},
        responses::{MealListResponse, MealResponse},
    },
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::date::month_bounds;

fn list_response(result: Result<Vec<Meal>>) -> HttpResponse {
    match result {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success(
            MealListResponse { items },
            "Meals retrieved successfully",
        )),
        Err(e) => error_response(&e, None),
    }
}

/// 某月食谱，按日期及早中晚排序；对象过滤为精确匹配
pub async fn monthly_meals(
    service: &MealService,
    query: MonthlyMealParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let Some((first, last)) = month_bounds(query.year, query.month) else {
        return Ok(bad_request(ErrorCode::BadRequest, "Invalid year or month"));
    };

    Ok(list_response(
        storage
            .list_meals_between(first, last, query.target_type)
            .await,
    ))
}

pub async fn daily_meals(
    service: &MealService,
    query: DailyMealParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    Ok(list_response(
        storage
            .list_meals_between(query.date, query.date, query.target_type)
            .await,
    ))
}

pub async fn get_meal(
    service: &MealService,
    meal_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_meal_by_id(meal_id).await {
        Ok(Some(meal)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MealResponse { meal },
            "Meal retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::MealNotFound, "Meal not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
