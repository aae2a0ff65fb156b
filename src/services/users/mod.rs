pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod roles;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_users(
        &self,
        query: UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, query, request).await
    }

    pub async fn create_user(
        &self,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data, request).await
    }

    pub async fn get_user(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_user(self, user_id, request).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update_data: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, user_id, update_data, request).await
    }

    pub async fn add_role(
        &self,
        user_id: i64,
        role: UserRole,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roles::add_role(self, user_id, role, request).await
    }

    pub async fn remove_role(
        &self,
        user_id: i64,
        role: UserRole,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roles::remove_role(self, user_id, role, request).await
    }

    pub async fn delete_user(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_user(self, user_id, request).await
    }
}
