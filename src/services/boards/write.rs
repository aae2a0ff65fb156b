use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{BoardService, current_viewer};
use crate::models::{
    ApiResponse, ErrorCode,
    boards::{
        entities::BoardType,
        requests::{CreateBoardRequest, UpdateBoardRequest},
        responses::BoardResponse,
    },
};
use crate::services::{bad_request, error_response, forbidden, not_found};

const MAX_TITLE_LEN: usize = 200;
const MAX_CONTENT_LEN: usize = 20000;

fn validate_post(title: Option<&str>, content: Option<&str>) -> Result<(), &'static str> {
    if let Some(title) = title {
        let len = title.trim().chars().count();
        if len == 0 || len > MAX_TITLE_LEN {
            return Err("Title must be 1-200 characters");
        }
    }
    if let Some(content) = content
        && (content.trim().is_empty() || content.chars().count() > MAX_CONTENT_LEN)
    {
        return Err("Content must be 1-20000 characters");
    }
    Ok(())
}

pub async fn create_board(
    service: &BoardService,
    mut board_data: CreateBoardRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let viewer = match current_viewer(&storage, request).await {
        Ok(viewer) => viewer,
        Err(response) => return Ok(response),
    };

    if let Err(msg) = validate_post(Some(&board_data.title), Some(&board_data.content)) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    // 学生在班级板块发帖时默认发到本班
    if board_data.board_type == BoardType::ClassBoard && board_data.target_classroom_id.is_none() {
        board_data.target_classroom_id = viewer.student_classroom_id;
    }
    if board_data.board_type == BoardType::ClassBoard && board_data.target_classroom_id.is_none() {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Class board posts require a target classroom",
        ));
    }

    if !viewer.can_write(board_data.board_type, board_data.target_classroom_id) {
        return Ok(forbidden(
            ErrorCode::BoardPermissionDenied,
            "You do not have permission to write on this board",
        ));
    }
    if !viewer.can_pin() {
        board_data.is_pinned = false;
    }

    match storage.create_board(viewer.user_id, board_data).await {
        Ok(board) => {
            tracing::info!(
                "Post {} created on {} by user {}",
                board.id,
                board.board_type,
                viewer.user_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                BoardResponse { board },
                "Post created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_board(
    service: &BoardService,
    board_id: i64,
    update_data: UpdateBoardRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let viewer = match current_viewer(&storage, request).await {
        Ok(viewer) => viewer,
        Err(response) => return Ok(response),
    };

    if let Err(msg) = validate_post(update_data.title.as_deref(), update_data.content.as_deref()) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let board = match storage.get_board_by_id(board_id).await {
        Ok(Some(board)) => board,
        Ok(None) => return Ok(not_found(ErrorCode::BoardNotFound, "Post not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };
    if !viewer.can_modify(&board) {
        return Ok(forbidden(
            ErrorCode::BoardPermissionDenied,
            "Only the writer or an administrator can modify this post",
        ));
    }

    match storage.update_board(board_id, update_data).await {
        Ok(Some(board)) => {
            tracing::info!("Post {} updated by user {}", board_id, viewer.user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                BoardResponse { board },
                "Post updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::BoardNotFound, "Post not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 软删除
pub async fn delete_board(
    service: &BoardService,
    board_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let viewer = match current_viewer(&storage, request).await {
        Ok(viewer) => viewer,
        Err(response) => return Ok(response),
    };

    let board = match storage.get_board_by_id(board_id).await {
        Ok(Some(board)) => board,
        Ok(None) => return Ok(not_found(ErrorCode::BoardNotFound, "Post not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };
    if !viewer.can_modify(&board) {
        return Ok(forbidden(
            ErrorCode::BoardPermissionDenied,
            "Only the writer or an administrator can delete this post",
        ));
    }

    match storage.soft_delete_board(board_id).await {
        Ok(true) => {
            tracing::info!("Post {} deleted by user {}", board_id, viewer.user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Post deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::BoardNotFound, "Post not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn toggle_pin(
    service: &BoardService,
    board_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let viewer = match current_viewer(&storage, request).await {
        Ok(viewer) => viewer,
        Err(response) => return Ok(response),
    };

    if !viewer.can_pin() {
        return Ok(forbidden(
            ErrorCode::BoardPermissionDenied,
            "Only administrators can pin posts",
        ));
    }

    let board = match storage.get_board_by_id(board_id).await {
        Ok(Some(board)) => board,
        Ok(None) => return Ok(not_found(ErrorCode::BoardNotFound, "Post not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };

    let pinned = !board.is_pinned;
    match storage.set_board_pinned(board_id, pinned).await {
        Ok(true) => {
            tracing::info!("Post {} pinned: {}", board_id, pinned);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(if pinned {
                "Post pinned"
            } else {
                "Post unpinned"
            })))
        }
        Ok(false) => Ok(not_found(ErrorCode::BoardNotFound, "Post not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_post() {
        assert!(validate_post(Some("체육대회 안내"), Some("10월 5일 운동장")).is_ok());
        assert!(validate_post(None, None).is_ok());
        assert!(validate_post(Some(" "), None).is_err());
        assert!(validate_post(None, Some("")).is_err());
        assert!(validate_post(Some(&"가".repeat(201)), None).is_err());
    }
}
