pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::facilities::requests::{
    CreateFacilityRequest, FacilityListParams, UpdateFacilityRequest,
};
use crate::storage::Storage;

pub struct FacilityService {
    storage: Option<Arc<dyn Storage>>,
}

impl FacilityService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_facilities(
        &self,
        query: FacilityListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_facilities(self, query, request).await
    }

    pub async fn get_facility(
        &self,
        facility_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::get_facility(self, facility_id, request).await
    }

    pub async fn create_facility(
        &self,
        facility_data: CreateFacilityRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_facility(self, facility_data, request).await
    }

    pub async fn update_facility(
        &self,
        facility_id: i64,
        update_data: UpdateFacilityRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_facility(self, facility_id, update_data, request).await
    }

    pub async fn delete_facility(
        &self,
        facility_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_facility(self, facility_id, request).await
    }
}
