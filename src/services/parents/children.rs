use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ParentService;
use crate::models::{
    ApiResponse, ErrorCode,
    parents::{requests::LinkChildRequest, responses::ChildrenResponse},
};
use crate::services::{current_user, error_response, not_found};

pub async fn list_children(
    service: &ParentService,
    parent_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_parent_by_id(parent_id).await {
        Ok(Some(parent)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChildrenResponse {
                items: parent.children,
            },
            "Children retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ParentNotFound, "Parent not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 关联子女，设为代表监护人时清除该学生其他监护人的标记
pub async fn link_child(
    service: &ParentService,
    parent_id: i64,
    link_data: LinkChildRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let student_id = link_data.student_id;

    match storage.link_child(parent_id, link_data).await {
        Ok(child) => {
            tracing::info!("Parent {} linked to student {}", parent_id, student_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                child,
                "Child linked successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn unlink_child(
    service: &ParentService,
    parent_id: i64,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.unlink_child(parent_id, student_id).await {
        Ok(true) => {
            tracing::info!("Parent {} unlinked from student {}", parent_id, student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Child unlinked successfully")))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::FamilyRelationNotFound,
            "Family relation not found",
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 当前登录家长的子女
pub async fn my_children(
    service: &ParentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.get_parent_by_user_id(user.id).await {
        Ok(Some(parent)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChildrenResponse {
                items: parent.children,
            },
            "Children retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::ParentNotFound,
            "Parent information not found for current user",
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}
