pub mod create;
pub mod get;
pub mod import;
pub mod list;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::staff::requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest};
use crate::storage::Storage;

pub struct StaffService {
    storage: Option<Arc<dyn Storage>>,
}

impl StaffService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_staff(
        &self,
        query: StaffListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_staff(self, query, request).await
    }

    pub async fn get_staff(&self, staff_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_staff(self, staff_id, request).await
    }

    pub async fn create_staff(
        &self,
        staff_data: CreateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_staff(self, staff_data, request).await
    }

    pub async fn update_staff(
        &self,
        staff_id: i64,
        update_data: UpdateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_staff(self, staff_id, update_data, request).await
    }

    pub async fn retire_staff(
        &self,
        staff_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::retire_staff(self, staff_id, request).await
    }

    pub async fn import_staff(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_staff(self, payload, request).await
    }
}
