pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_subjects(
        &self,
        grade: Option<i32>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, grade, request).await
    }

    pub async fn get_subject(&self, code: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_subject(self, code, request).await
    }

    pub async fn create_subject(
        &self,
        subject_data: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_subject(self, subject_data, request).await
    }

    pub async fn update_subject(
        &self,
        code: &str,
        update_data: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_subject(self, code, update_data, request).await
    }

    pub async fn delete_subject(
        &self,
        code: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_subject(self, code, request).await
    }
}
