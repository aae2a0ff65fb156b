use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssetService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    assets::{
        entities::AssetStatus,
        requests::{AssetListParams, AssetListQuery, CreateAssetRequest, UpdateAssetRequest},
        responses::AssetResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::validate_code;

fn validate_asset_name(name: &str) -> Result<(), &'static str> {
    let len = name.trim().chars().count();
    if len == 0 || len > 100 {
        return Err("Asset name must be 1-100 characters");
    }
    Ok(())
}

/// 关键字匹配名称或编号
pub async fn list_assets(
    service: &AssetService,
    query: AssetListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let list_query = AssetListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        keyword: query.keyword.filter(|k| !k.trim().is_empty()),
        category: query.category.filter(|c| !c.trim().is_empty()),
        status: query.status,
    };

    match storage.list_assets_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Asset list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn get_asset(
    service: &AssetService,
    asset_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_asset_by_id(asset_id).await {
        Ok(Some(asset)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssetResponse { asset },
            "Asset retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::AssetNotFound, "Asset not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn create_asset(
    service: &AssetService,
    mut asset_data: CreateAssetRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    asset_data.code = asset_data.code.trim().to_string();
    if let Err(msg) = validate_asset_name(&asset_data.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_code(&asset_data.code) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.create_asset(asset_data).await {
        Ok(asset) => {
            tracing::info!("Asset {} ({}) registered", asset.id, asset.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssetResponse { asset },
                "Asset created successfully",
            )))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::AssetCodeAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_asset(
    service: &AssetService,
    asset_id: i64,
    mut update_data: UpdateAssetRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_asset_name(name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(code) = update_data.code.take() {
        let code = code.trim().to_string();
        if let Err(msg) = validate_code(&code) {
            return Ok(bad_request(ErrorCode::BadRequest, msg));
        }
        update_data.code = Some(code);
    }

    match storage.update_asset(asset_id, update_data).await {
        Ok(Some(asset)) => {
            tracing::info!("Asset {} updated", asset_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssetResponse { asset },
                "Asset updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::AssetNotFound, "Asset not found")),
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::AssetCodeAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn change_status(
    service: &AssetService,
    asset_id: i64,
    status: AssetStatus,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.set_asset_status(asset_id, status).await {
        Ok(true) => {
            tracing::info!("Asset {} status changed to {}", asset_id, status);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
                "Asset status changed to {}",
                status.label()
            ))))
        }
        Ok(false) => Ok(not_found(ErrorCode::AssetNotFound, "Asset not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_asset(
    service: &AssetService,
    asset_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_asset(asset_id).await {
        Ok(true) => {
            tracing::info!("Asset {} deleted", asset_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Asset deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::AssetNotFound, "Asset not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
