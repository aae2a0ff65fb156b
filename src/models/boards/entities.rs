use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;
use crate::models::users::entities::UserRole;

define_string_enum! {
    /// 公告板类型
    pub enum BoardType => "../frontend/src/types/generated/board.ts" {
        SchoolNotice = ("SCHOOL_NOTICE", "학교 공지"),
        GradeBoard = ("GRADE_BOARD", "학년 게시판"),
        ClassBoard = ("CLASS_BOARD", "학급 게시판"),
        TeacherBoard = ("TEACHER_BOARD", "교사 게시판"),
        ParentNotice = ("PARENT_NOTICE", "가정통신문"),
        ParentBoard = ("PARENT_BOARD", "학부모 게시판"),
    }
}

impl BoardType {
    pub fn is_parent_board(&self) -> bool {
        matches!(self, BoardType::ParentNotice | BoardType::ParentBoard)
    }
}

// 帖子实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/board.ts")]
pub struct Board {
    pub id: i64,
    pub board_type: BoardType,
    pub title: String,
    pub content: String,
    pub writer_id: i64,
    pub writer_name: String,
    pub target_grade: Option<i32>,
    pub target_classroom_id: Option<i64>,
    pub view_count: i64,
    pub is_pinned: bool,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 访问公告板的用户及其所属班级信息
#[derive(Debug, Clone, Default)]
pub struct BoardViewer {
    pub user_id: i64,
    pub roles: Vec<UserRole>,
    // 学生本学年所在年级与班级
    pub student_grade: Option<i32>,
    pub student_classroom_id: Option<i64>,
    // 教师担任班主任的班级
    pub homeroom_classroom_ids: Vec<i64>,
}

impl BoardViewer {
    fn has(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has(UserRole::Admin)
    }

    fn in_classroom(&self, classroom_id: Option<i64>) -> bool {
        self.has(UserRole::Student)
            && classroom_id.is_some()
            && self.student_classroom_id == classroom_id
    }

    pub fn can_write(&self, board_type: BoardType, target_classroom_id: Option<i64>) -> bool {
        if self.is_admin() {
            return true;
        }
        match board_type {
            BoardType::SchoolNotice => false,
            BoardType::GradeBoard | BoardType::TeacherBoard | BoardType::ParentNotice => {
                self.has(UserRole::Teacher)
            }
            BoardType::ClassBoard => self.in_classroom(target_classroom_id),
            BoardType::ParentBoard => self.has(UserRole::Parent),
        }
    }

    pub fn can_read(&self, board: &Board) -> bool {
        if self.is_admin() {
            return true;
        }
        match board.board_type {
            BoardType::SchoolNotice => true,
            BoardType::GradeBoard => {
                self.has(UserRole::Teacher)
                    || (self.has(UserRole::Student)
                        && board.target_grade.is_some()
                        && self.student_grade == board.target_grade)
            }
            BoardType::ClassBoard => {
                board
                    .target_classroom_id
                    .is_some_and(|id| self.homeroom_classroom_ids.contains(&id))
                    || self.in_classroom(board.target_classroom_id)
            }
            BoardType::TeacherBoard => self.has(UserRole::Teacher),
            BoardType::ParentNotice | BoardType::ParentBoard => {
                self.has(UserRole::Parent) || self.has(UserRole::Teacher)
            }
        }
    }

    /// 修改与删除：作者本人或管理员
    pub fn can_modify(&self, board: &Board) -> bool {
        self.is_admin() || board.writer_id == self.user_id
    }

    pub fn can_pin(&self) -> bool {
        self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(board_type: BoardType, writer_id: i64) -> Board {
        let now = chrono::Utc::now();
        Board {
            id: 1,
            board_type,
            title: "t".to_string(),
            content: "c".to_string(),
            writer_id,
            writer_name: "w".to_string(),
            target_grade: Some(2),
            target_classroom_id: Some(10),
            view_count: 0,
            is_pinned: false,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn viewer(id: i64, roles: &[UserRole]) -> BoardViewer {
        BoardViewer {
            user_id: id,
            roles: roles.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_school_notice_admin_only_write() {
        let teacher = viewer(1, &[UserRole::Teacher]);
        let admin = viewer(2, &[UserRole::Admin]);
        assert!(!teacher.can_write(BoardType::SchoolNotice, None));
        assert!(admin.can_write(BoardType::SchoolNotice, None));
        // 所有人可读
        let parent = viewer(3, &[UserRole::Parent]);
        assert!(parent.can_read(&board(BoardType::SchoolNotice, 2)));
    }

    #[test]
    fn test_class_board_membership() {
        let mut student = viewer(5, &[UserRole::Student]);
        student.student_classroom_id = Some(10);
        assert!(student.can_write(BoardType::ClassBoard, Some(10)));
        assert!(!student.can_write(BoardType::ClassBoard, Some(11)));
        assert!(student.can_read(&board(BoardType::ClassBoard, 1)));

        let mut homeroom = viewer(6, &[UserRole::Teacher]);
        assert!(!homeroom.can_read(&board(BoardType::ClassBoard, 1)));
        homeroom.homeroom_classroom_ids = vec![10];
        assert!(homeroom.can_read(&board(BoardType::ClassBoard, 1)));
    }

    #[test]
    fn test_grade_board_read() {
        let mut student = viewer(5, &[UserRole::Student]);
        student.student_grade = Some(3);
        assert!(!student.can_read(&board(BoardType::GradeBoard, 1)));
        student.student_grade = Some(2);
        assert!(student.can_read(&board(BoardType::GradeBoard, 1)));
        assert!(viewer(1, &[UserRole::Teacher]).can_read(&board(BoardType::GradeBoard, 9)));
    }

    #[test]
    fn test_parent_boards() {
        let parent = viewer(3, &[UserRole::Parent]);
        assert!(parent.can_write(BoardType::ParentBoard, None));
        assert!(!parent.can_write(BoardType::ParentNotice, None));
        assert!(parent.can_read(&board(BoardType::ParentNotice, 1)));
        assert!(!parent.can_read(&board(BoardType::TeacherBoard, 1)));
        let student = viewer(4, &[UserRole::Student]);
        assert!(!student.can_read(&board(BoardType::ParentBoard, 1)));
    }

    #[test]
    fn test_modify_and_pin() {
        let writer = viewer(1, &[UserRole::Teacher]);
        let other = viewer(2, &[UserRole::Teacher]);
        let admin = viewer(3, &[UserRole::Admin]);
        let post = board(BoardType::TeacherBoard, 1);
        assert!(writer.can_modify(&post));
        assert!(!other.can_modify(&post));
        assert!(admin.can_modify(&post));
        assert!(!writer.can_pin());
        assert!(admin.can_pin());
    }
}
