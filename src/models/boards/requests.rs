use serde::Deserialize;
use ts_rs::TS;

use super::entities::BoardType;
use crate::models::common::{PaginationQuery, deserialize_optional_from_str};

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct BoardListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub board_type: BoardType,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub grade: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub classroom_id: Option<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct RecentBoardParams {
    pub board_type: BoardType,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct CreateBoardRequest {
    pub board_type: BoardType,
    pub title: String,
    pub content: String,
    pub target_grade: Option<i32>,
    pub target_classroom_id: Option<i64>,
    #[serde(default)]
    pub is_pinned: bool,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct UpdateBoardRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub target_grade: Option<i32>,
    pub target_classroom_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct BoardListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub board_type: BoardType,
    pub grade: Option<i32>,
    pub classroom_id: Option<i64>,
}
