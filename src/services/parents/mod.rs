pub mod children;
pub mod create;
pub mod get;
pub mod import;
pub mod list;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::parents::entities::ParentStatus;
use crate::models::parents::requests::{
    CreateParentRequest, LinkChildRequest, ParentListParams, UpdateParentRequest,
};
use crate::storage::Storage;

pub struct ParentService {
    storage: Option<Arc<dyn Storage>>,
}

impl ParentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_parents(
        &self,
        query: ParentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_parents(self, query, request).await
    }

    pub async fn get_parent(
        &self,
        parent_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_parent(self, parent_id, request).await
    }

    pub async fn create_parent(
        &self,
        parent_data: CreateParentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_parent(self, parent_data, request).await
    }

    pub async fn update_parent(
        &self,
        parent_id: i64,
        update_data: UpdateParentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_parent(self, parent_id, update_data, request).await
    }

    pub async fn change_status(
        &self,
        parent_id: i64,
        status: ParentStatus,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::change_status(self, parent_id, status, request).await
    }

    pub async fn list_children(
        &self,
        parent_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        children::list_children(self, parent_id, request).await
    }

    pub async fn link_child(
        &self,
        parent_id: i64,
        link_data: LinkChildRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        children::link_child(self, parent_id, link_data, request).await
    }

    pub async fn unlink_child(
        &self,
        parent_id: i64,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        children::unlink_child(self, parent_id, student_id, request).await
    }

    pub async fn my_children(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        children::my_children(self, request).await
    }

    pub async fn import_parents(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_parents(self, payload, request).await
    }
}
