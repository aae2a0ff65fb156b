use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{BoardService, current_viewer};
use crate::models::{ApiResponse, ErrorCode, boards::responses::BoardResponse};
use crate::services::{error_response, forbidden, not_found};

/// 帖子详情，每次查看浏览次数加一
pub async fn get_board(
    service: &BoardService,
    board_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let viewer = match current_viewer(&storage, request).await {
        Ok(viewer) => viewer,
        Err(response) => return Ok(response),
    };

    let mut board = match storage.get_board_by_id(board_id).await {
        Ok(Some(board)) => board,
        Ok(None) => return Ok(not_found(ErrorCode::BoardNotFound, "Post not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };

    if !viewer.can_read(&board) {
        return Ok(forbidden(
            ErrorCode::BoardPermissionDenied,
            "You do not have permission to read this post",
        ));
    }

    if let Err(e) = storage.increment_board_view(board_id).await {
        return Ok(error_response(&e, None));
    }
    board.view_count += 1;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BoardResponse { board },
        "Post retrieved successfully",
    )))
}
