use serde::Serialize;
use ts_rs::TS;

use super::entities::Board;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct BoardResponse {
    pub board: Board,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct BoardListResponse {
    pub items: Vec<Board>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct RecentBoardResponse {
    pub items: Vec<Board>,
}
