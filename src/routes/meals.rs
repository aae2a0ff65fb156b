use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::meals::requests::{
    CreateMealRequest, DailyMealParams, MonthlyMealParams, UpdateMealRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::MealService;
use crate::utils::SafeIDI64;

// 懒加载的全局 MealService 实例
static MEAL_SERVICE: Lazy<MealService> = Lazy::new(MealService::new_lazy);

pub async fn monthly_meals(
    req: HttpRequest,
    query: web::Query<MonthlyMealParams>,
) -> ActixResult<HttpResponse> {
    MEAL_SERVICE.monthly_meals(query.into_inner(), &req).await
}

pub async fn daily_meals(
    req: HttpRequest,
    query: web::Query<DailyMealParams>,
) -> ActixResult<HttpResponse> {
    MEAL_SERVICE.daily_meals(query.into_inner(), &req).await
}

pub async fn get_meal(req: HttpRequest, meal_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MEAL_SERVICE.get_meal(meal_id.0, &req).await
}

pub async fn create_meal(
    req: HttpRequest,
    meal_data: web::Json<CreateMealRequest>,
) -> ActixResult<HttpResponse> {
    MEAL_SERVICE.create_meal(meal_data.into_inner(), &req).await
}

pub async fn update_meal(
    req: HttpRequest,
    meal_id: SafeIDI64,
    update_data: web::Json<UpdateMealRequest>,
) -> ActixResult<HttpResponse> {
    MEAL_SERVICE
        .update_meal(meal_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_meal(req: HttpRequest, meal_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MEAL_SERVICE.delete_meal(meal_id.0, &req).await
}

// 配置路由
pub fn configure_meal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/meals")
            .wrap(middlewares::RequireJWT)
            .route("/monthly", web::get().to(monthly_meals))
            .route("/daily", web::get().to(daily_meals))
            // 营养师和管理员维护食谱
            .service(
                web::resource("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::meal_manager_roles()))
                    .route(web::post().to(create_meal)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_meal))
                    .route(
                        web::put()
                            .to(update_meal)
                            .wrap(middlewares::RequireRole::new_any(UserRole::meal_manager_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_meal)
                            .wrap(middlewares::RequireRole::new_any(UserRole::meal_manager_roles())),
                    ),
            ),
    );
}
