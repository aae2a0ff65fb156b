use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::boards::requests::{
    BoardListParams, CreateBoardRequest, RecentBoardParams, UpdateBoardRequest,
};
use crate::services::BoardService;
use crate::utils::SafeIDI64;

// 懒加载的全局 BoardService 实例
static BOARD_SERVICE: Lazy<BoardService> = Lazy::new(BoardService::new_lazy);

pub async fn list_boards(
    req: HttpRequest,
    query: web::Query<BoardListParams>,
) -> ActixResult<HttpResponse> {
    BOARD_SERVICE.list_boards(query.into_inner(), &req).await
}

pub async fn recent_boards(
    req: HttpRequest,
    query: web::Query<RecentBoardParams>,
) -> ActixResult<HttpResponse> {
    BOARD_SERVICE.recent_boards(query.into_inner(), &req).await
}

pub async fn get_board(req: HttpRequest, board_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BOARD_SERVICE.get_board(board_id.0, &req).await
}

pub async fn create_board(
    req: HttpRequest,
    board_data: web::Json<CreateBoardRequest>,
) -> ActixResult<HttpResponse> {
    BOARD_SERVICE.create_board(board_data.into_inner(), &req).await
}

pub async fn update_board(
    req: HttpRequest,
    board_id: SafeIDI64,
    update_data: web::Json<UpdateBoardRequest>,
) -> ActixResult<HttpResponse> {
    BOARD_SERVICE
        .update_board(board_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_board(req: HttpRequest, board_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BOARD_SERVICE.delete_board(board_id.0, &req).await
}

pub async fn toggle_pin(req: HttpRequest, board_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BOARD_SERVICE.toggle_pin(board_id.0, &req).await
}

// 配置路由
// 读写权限按板块类型在服务层判断
pub fn configure_board_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/boards")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_boards))
            .route("", web::post().to(create_board))
            .route("/recent", web::get().to(recent_boards))
            .route("/{id}", web::get().to(get_board))
            .route("/{id}", web::put().to(update_board))
            .route("/{id}", web::delete().to(delete_board))
            .route("/{id}/pin", web::put().to(toggle_pin)),
    );
}
