pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assets::entities::AssetStatus;
use crate::models::assets::requests::{AssetListParams, CreateAssetRequest, UpdateAssetRequest};
use crate::storage::Storage;

pub struct AssetService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssetService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_assets(
        &self,
        query: AssetListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_assets(self, query, request).await
    }

    pub async fn get_asset(&self, asset_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::get_asset(self, asset_id, request).await
    }

    pub async fn create_asset(
        &self,
        asset_data: CreateAssetRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_asset(self, asset_data, request).await
    }

    pub async fn update_asset(
        &self,
        asset_id: i64,
        update_data: UpdateAssetRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_asset(self, asset_id, update_data, request).await
    }

    pub async fn change_status(
        &self,
        asset_id: i64,
        status: AssetStatus,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::change_status(self, asset_id, status, request).await
    }

    pub async fn delete_asset(
        &self,
        asset_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_asset(self, asset_id, request).await
    }
}
