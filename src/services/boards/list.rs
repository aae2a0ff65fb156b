use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{BoardService, current_viewer};
use crate::models::{
    ApiResponse, ErrorCode,
    boards::{
        entities::{BoardType, BoardViewer},
        requests::{BoardListParams, BoardListQuery, RecentBoardParams},
        responses::RecentBoardResponse,
    },
    users::entities::UserRole,
};
use crate::services::{error_response, forbidden};

const DEFAULT_RECENT_LIMIT: u64 = 5;
const MAX_RECENT_LIMIT: u64 = 20;

/// 列表可见范围：返回实际使用的年级与班级过滤条件
///
/// 学生只能看到本年级、本班的帖子，教师的班级板块限于自己担任班主任的班级。
fn list_scope(
    viewer: &BoardViewer,
    board_type: BoardType,
    grade: Option<i32>,
    classroom_id: Option<i64>,
) -> Result<(Option<i32>, Option<i64>), &'static str> {
    if viewer.is_admin() {
        return Ok((grade, classroom_id));
    }
    let is_teacher = viewer.roles.contains(&UserRole::Teacher);
    let is_student = viewer.roles.contains(&UserRole::Student);
    let is_parent = viewer.roles.contains(&UserRole::Parent);

    match board_type {
        BoardType::SchoolNotice => Ok((grade, classroom_id)),
        BoardType::GradeBoard => {
            if is_teacher {
                Ok((grade, classroom_id))
            } else if is_student && viewer.student_grade.is_some() {
                Ok((viewer.student_grade, classroom_id))
            } else {
                Err("No access to grade boards")
            }
        }
        BoardType::ClassBoard => {
            if let Some(id) = classroom_id
                && viewer.homeroom_classroom_ids.contains(&id)
            {
                Ok((grade, Some(id)))
            } else if is_student && viewer.student_classroom_id.is_some() {
                Ok((grade, viewer.student_classroom_id))
            } else {
                Err("No access to this class board")
            }
        }
        BoardType::TeacherBoard => {
            if is_teacher {
                Ok((grade, classroom_id))
            } else {
                Err("Teacher board is for teachers only")
            }
        }
        BoardType::ParentNotice | BoardType::ParentBoard => {
            if is_parent || is_teacher {
                Ok((grade, classroom_id))
            } else {
                Err("Parent boards are for parents and teachers only")
            }
        }
    }
}

/// 置顶优先、时间倒序，已删除的帖子不显示
pub async fn list_boards(
    service: &BoardService,
    query: BoardListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let viewer = match current_viewer(&storage, request).await {
        Ok(viewer) => viewer,
        Err(response) => return Ok(response),
    };

    let (grade, classroom_id) =
        match list_scope(&viewer, query.board_type, query.grade, query.classroom_id) {
            Ok(scope) => scope,
            Err(msg) => return Ok(forbidden(ErrorCode::BoardPermissionDenied, msg)),
        };

    let list_query = BoardListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        board_type: query.board_type,
        grade,
        classroom_id,
    };

    match storage.list_boards(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Board list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 首页用的最新帖子，只返回当前用户可读的
pub async fn recent_boards(
    service: &BoardService,
    query: RecentBoardParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let viewer = match current_viewer(&storage, request).await {
        Ok(viewer) => viewer,
        Err(response) => return Ok(response),
    };

    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);

    match storage.list_recent_boards(query.board_type, limit).await {
        Ok(boards) => {
            let items = boards.into_iter().filter(|b| viewer.can_read(b)).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RecentBoardResponse { items },
                "Recent boards retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(roles: &[UserRole]) -> BoardViewer {
        BoardViewer {
            user_id: 1,
            roles: roles.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_student_scope_is_forced() {
        let mut student = viewer(&[UserRole::Student]);
        student.student_grade = Some(2);
        student.student_classroom_id = Some(7);

        assert_eq!(
            list_scope(&student, BoardType::GradeBoard, Some(3), None),
            Ok((Some(2), None))
        );
        assert_eq!(
            list_scope(&student, BoardType::ClassBoard, None, Some(8)),
            Ok((None, Some(7)))
        );
        assert!(list_scope(&student, BoardType::TeacherBoard, None, None).is_err());
        assert!(list_scope(&student, BoardType::ParentBoard, None, None).is_err());
    }

    #[test]
    fn test_teacher_class_board_requires_homeroom() {
        let mut teacher = viewer(&[UserRole::Teacher]);
        assert!(list_scope(&teacher, BoardType::ClassBoard, None, Some(4)).is_err());
        teacher.homeroom_classroom_ids = vec![4];
        assert_eq!(
            list_scope(&teacher, BoardType::ClassBoard, None, Some(4)),
            Ok((None, Some(4)))
        );
        assert!(list_scope(&teacher, BoardType::ParentNotice, Some(1), None).is_ok());
    }

    #[test]
    fn test_admin_and_school_notice() {
        let admin = viewer(&[UserRole::Admin]);
        assert_eq!(
            list_scope(&admin, BoardType::ClassBoard, None, Some(99)),
            Ok((None, Some(99)))
        );
        let parent = viewer(&[UserRole::Parent]);
        assert!(list_scope(&parent, BoardType::SchoolNotice, None, None).is_ok());
        assert!(list_scope(&parent, BoardType::GradeBoard, None, None).is_err());
    }
}
