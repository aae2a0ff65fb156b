pub mod dashboard;
pub mod settings;
pub mod settings_cache;

pub use settings_cache::SettingCache;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::system::requests::UpdateSystemSettingRequest;
use crate::storage::Storage;

pub struct SystemService {
    storage: Option<Arc<dyn Storage>>,
}

impl SystemService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn get_settings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        settings::get_settings(self, request).await
    }

    pub async fn update_settings(
        &self,
        update_data: UpdateSystemSettingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        settings::update_settings(self, update_data, request).await
    }

    pub async fn get_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_dashboard(self, request).await
    }

    pub async fn get_info(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_info(self, request).await
    }
}
