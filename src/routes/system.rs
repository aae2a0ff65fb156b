use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::system::requests::UpdateSystemSettingRequest;
use crate::models::users::entities::UserRole;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn get_settings(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_settings(&request).await
}

pub async fn update_settings(
    request: HttpRequest,
    update_data: web::Json<UpdateSystemSettingRequest>,
) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE
        .update_settings(update_data.into_inner(), &request)
        .await
}

pub async fn get_dashboard(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_dashboard(&request).await
}

pub async fn get_info(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_info(&request).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .wrap(middleware::Compress::default())
            // 版本与运行时间 - 无需登录
            .route("/info", web::get().to(get_info))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::resource("/settings")
                            .route(web::get().to(get_settings))
                            .route(
                                web::put()
                                    .to(update_settings)
                                    .wrap(middlewares::RequireRole::new_any(
                                        UserRole::admin_roles(),
                                    )),
                            ),
                    )
                    .service(
                        web::resource("/dashboard")
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .route(web::get().to(get_dashboard)),
                    ),
            ),
    );
}
