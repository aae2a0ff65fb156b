pub mod detail;
pub mod list;
pub mod write;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::boards::entities::BoardViewer;
use crate::models::boards::requests::{
    BoardListParams, CreateBoardRequest, RecentBoardParams, UpdateBoardRequest,
};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

pub struct BoardService {
    storage: Option<Arc<dyn Storage>>,
}

impl BoardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_boards(
        &self,
        query: BoardListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_boards(self, query, request).await
    }

    pub async fn recent_boards(
        &self,
        query: RecentBoardParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::recent_boards(self, query, request).await
    }

    pub async fn get_board(&self, board_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        detail::get_board(self, board_id, request).await
    }

    pub async fn create_board(
        &self,
        board_data: CreateBoardRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        write::create_board(self, board_data, request).await
    }

    pub async fn update_board(
        &self,
        board_id: i64,
        update_data: UpdateBoardRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        write::update_board(self, board_id, update_data, request).await
    }

    pub async fn delete_board(
        &self,
        board_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        write::delete_board(self, board_id, request).await
    }

    pub async fn toggle_pin(&self, board_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        write::toggle_pin(self, board_id, request).await
    }
}

/// 组装访问者信息：学生的年级与班级，教师担任班主任的班级
pub(crate) async fn load_viewer(storage: &Arc<dyn Storage>, user: &User) -> Result<BoardViewer> {
    let mut viewer = BoardViewer {
        user_id: user.id,
        roles: user.roles.clone(),
        ..Default::default()
    };

    if user.roles.contains(&UserRole::Student)
        && let Some(student) = storage.get_student_by_user_id(user.id).await?
        && let Some(assignment) = student.assignment
    {
        viewer.student_grade = Some(assignment.grade);
        viewer.student_classroom_id = Some(assignment.classroom_id);
    }

    if user.roles.contains(&UserRole::Teacher)
        && let Some(teacher) = storage.get_teacher_by_user_id(user.id).await?
    {
        viewer.homeroom_classroom_ids = storage.list_homeroom_classroom_ids(teacher.id).await?;
    }

    Ok(viewer)
}

/// 当前用户对应的访问者，失败时给出错误响应
async fn current_viewer(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> std::result::Result<BoardViewer, HttpResponse> {
    let user = super::current_user(request)?;
    load_viewer(storage, &user)
        .await
        .map_err(|e| super::error_response(&e, None))
}
