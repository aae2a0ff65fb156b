pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod members;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classrooms::requests::{
    BulkStatusRequest, ClassroomListParams, CreateClassroomRequest, TransferStudentRequest,
    UpdateClassroomRequest,
};
use crate::storage::Storage;

pub struct ClassroomService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassroomService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_classrooms(
        &self,
        query: ClassroomListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, query, request).await
    }

    pub async fn get_classroom(
        &self,
        classroom_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom(self, classroom_id, request).await
    }

    pub async fn create_classroom(
        &self,
        classroom_data: CreateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, classroom_data, request).await
    }

    pub async fn update_classroom(
        &self,
        classroom_id: i64,
        update_data: UpdateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, classroom_id, update_data, request).await
    }

    pub async fn bulk_update_status(
        &self,
        status_data: BulkStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::bulk_update_status(self, status_data, request).await
    }

    pub async fn delete_classroom(
        &self,
        classroom_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, classroom_id, request).await
    }

    pub async fn assign_students(
        &self,
        classroom_id: i64,
        student_ids: Vec<i64>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::assign_students(self, classroom_id, student_ids, request).await
    }

    pub async fn assign_random(
        &self,
        classroom_id: i64,
        count: u32,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::assign_random(self, classroom_id, count, request).await
    }

    pub async fn remove_students(
        &self,
        classroom_id: i64,
        student_ids: Vec<i64>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::remove_students(self, classroom_id, student_ids, request).await
    }

    pub async fn transfer_student(
        &self,
        classroom_id: i64,
        transfer_data: TransferStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::transfer_student(self, classroom_id, transfer_data, request).await
    }

    pub async fn export_roster(
        &self,
        classroom_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_roster(self, classroom_id, request).await
    }

    pub async fn import_classrooms(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_classrooms(self, payload, request).await
    }
}

/// 变更记录中的操作人（当前用户邮箱）
fn actor_of(request: &HttpRequest) -> Result<String, HttpResponse> {
    super::current_user(request).map(|user| user.email)
}
