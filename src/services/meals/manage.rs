use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MealService;
use crate::models::{
    ApiResponse, ErrorCode,
    meals::{
        requests::{CreateMealRequest, UpdateMealRequest},
        responses::MealResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};

const MAX_MENU_LEN: usize = 1000;

fn validate_menu(menu: Option<&str>, calories: Option<f64>) -> Result<(), &'static str> {
    if let Some(menu) = menu {
        let len = menu.trim().chars().count();
        if len == 0 || len > MAX_MENU_LEN {
            return Err("Menu must be 1-1000 characters");
        }
    }
    if calories.is_some_and(|c| !c.is_finite() || c < 0.0) {
        return Err("Calories must be a non-negative number");
    }
    Ok(())
}

pub async fn create_meal(
    service: &MealService,
    meal_data: CreateMealRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_menu(Some(&meal_data.menu), meal_data.calories) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.create_meal(meal_data).await {
        Ok(meal) => {
            tracing::info!(
                "Meal created: {} {} for {}",
                meal.meal_date,
                meal.meal_type,
                meal.target_type
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                MealResponse { meal },
                "Meal created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_meal(
    service: &MealService,
    meal_id: i64,
    update_data: UpdateMealRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_menu(update_data.menu.as_deref(), update_data.calories) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.update_meal(meal_id, update_data).await {
        Ok(Some(meal)) => {
            tracing::info!("Meal {} updated", meal_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MealResponse { meal },
                "Meal updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::MealNotFound, "Meal not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_meal(
    service: &MealService,
    meal_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_meal(meal_id).await {
        Ok(true) => {
            tracing::info!("Meal {} deleted", meal_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Meal deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::MealNotFound, "Meal not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_menu() {
        assert!(validate_menu(Some("잡곡밥, 된장국, 불고기"), Some(780.5)).is_ok());
        assert!(validate_menu(None, None).is_ok());
        assert!(validate_menu(Some(""), None).is_err());
        assert!(validate_menu(None, Some(-1.0)).is_err());
        assert!(validate_menu(None, Some(f64::INFINITY)).is_err());
    }
}
