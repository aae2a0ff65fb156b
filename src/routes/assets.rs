use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assets::requests::{
    AssetListParams, AssetStatusRequest, CreateAssetRequest, UpdateAssetRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssetService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AssetService 实例
static ASSET_SERVICE: Lazy<AssetService> = Lazy::new(AssetService::new_lazy);

pub async fn list_assets(
    req: HttpRequest,
    query: web::Query<AssetListParams>,
) -> ActixResult<HttpResponse> {
    ASSET_SERVICE.list_assets(query.into_inner(), &req).await
}

pub async fn get_asset(req: HttpRequest, asset_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSET_SERVICE.get_asset(asset_id.0, &req).await
}

pub async fn create_asset(
    req: HttpRequest,
    asset_data: web::Json<CreateAssetRequest>,
) -> ActixResult<HttpResponse> {
    ASSET_SERVICE
        .create_asset(asset_data.into_inner(), &req)
        .await
}

pub async fn update_asset(
    req: HttpRequest,
    asset_id: SafeIDI64,
    update_data: web::Json<UpdateAssetRequest>,
) -> ActixResult<HttpResponse> {
    ASSET_SERVICE
        .update_asset(asset_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn change_status(
    req: HttpRequest,
    asset_id: SafeIDI64,
    status_data: web::Json<AssetStatusRequest>,
) -> ActixResult<HttpResponse> {
    ASSET_SERVICE
        .change_status(asset_id.0, status_data.status, &req)
        .await
}

pub async fn delete_asset(req: HttpRequest, asset_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSET_SERVICE.delete_asset(asset_id.0, &req).await
}

// 配置路由
pub fn configure_asset_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assets")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::asset_manager_roles(),
                    ))
                    .route("", web::get().to(list_assets))
                    .route("", web::post().to(create_asset))
                    .route("/{id}", web::get().to(get_asset))
                    .route("/{id}", web::put().to(update_asset))
                    .route("/{id}", web::delete().to(delete_asset))
                    .route("/{id}/status", web::put().to(change_status)),
            ),
    );
}
