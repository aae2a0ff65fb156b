pub mod input;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{GradeListParams, InputGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, query, request).await
    }

    pub async fn list_student_grades(
        &self,
        student_id: i64,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_student_grades(self, student_id, query, request).await
    }

    pub async fn list_my_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_my_grades(self, query, request).await
    }

    pub async fn list_child_grades(
        &self,
        student_id: i64,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_child_grades(self, student_id, query, request).await
    }

    pub async fn get_grade(&self, grade_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_grade(self, grade_id, request).await
    }

    pub async fn input_grade(
        &self,
        grade_data: InputGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        input::input_grade(self, grade_data, request).await
    }

    pub async fn update_score(
        &self,
        grade_id: i64,
        score: f64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        input::update_score(self, grade_id, score, request).await
    }

    pub async fn delete_grade(
        &self,
        grade_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        input::delete_grade(self, grade_id, request).await
    }
}
