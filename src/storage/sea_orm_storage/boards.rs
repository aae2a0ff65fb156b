use super::SeaOrmStorage;
use super::users::load_users_by_ids;
use crate::entity::boards::{ActiveModel, Column, Entity as Boards, Model};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    boards::{
        entities::{Board, BoardType},
        requests::{BoardListQuery, CreateBoardRequest, UpdateBoardRequest},
        responses::BoardListResponse,
    },
};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

async fn assemble_boards<C: ConnectionTrait>(db: &C, models: Vec<Model>) -> Result<Vec<Board>> {
    let users = load_users_by_ids(db, models.iter().map(|b| b.writer_id)).await?;
    Ok(models
        .into_iter()
        .map(|b| {
            let writer_name = users
                .get(&b.writer_id)
                .map(|u| u.name.clone())
                .unwrap_or_default();
            b.into_board(writer_name)
        })
        .collect())
}

/// 未删除的帖子，置顶优先，其次按时间倒序
fn visible_of_type(board_type: BoardType) -> Select<Boards> {
    Boards::find()
        .filter(Column::BoardType.eq(board_type.as_str()))
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::IsPinned)
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

impl SeaOrmStorage {
    pub async fn list_boards_impl(&self, query: BoardListQuery) -> Result<BoardListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = visible_of_type(query.board_type);
        if let Some(grade) = query.grade {
            // 家长板块中未指定年级的帖子对所有年级可见
            select = if query.board_type.is_parent_board() {
                select.filter(
                    Condition::any()
                        .add(Column::TargetGrade.eq(grade))
                        .add(Column::TargetGrade.is_null()),
                )
            } else {
                select.filter(Column::TargetGrade.eq(grade))
            };
        }
        if let Some(classroom_id) = query.classroom_id {
            select = select.filter(Column::TargetClassroomId.eq(classroom_id));
        }

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询帖子总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询帖子页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询帖子列表失败: {e}")))?;

        Ok(BoardListResponse {
            items: assemble_boards(&self.db, models).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_recent_boards_impl(
        &self,
        board_type: BoardType,
        limit: u64,
    ) -> Result<Vec<Board>> {
        let models = visible_of_type(board_type)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询帖子列表失败: {e}")))?;
        assemble_boards(&self.db, models).await
    }

    /// 已删除的帖子视为不存在
    pub async fn get_board_by_id_impl(&self, id: i64) -> Result<Option<Board>> {
        let model = Boards::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询帖子失败: {e}")))?;
        match model {
            Some(model) => Ok(assemble_boards(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn increment_board_view_impl(&self, id: i64) -> Result<()> {
        Boards::update_many()
            .col_expr(Column::ViewCount, Expr::col(Column::ViewCount).add(1))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新浏览次数失败: {e}")))?;
        Ok(())
    }

    pub async fn create_board_impl(&self, writer_id: i64, req: CreateBoardRequest) -> Result<Board> {
        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            board_type: Set(req.board_type.to_string()),
            title: Set(req.title),
            content: Set(req.content),
            writer_id: Set(writer_id),
            target_grade: Set(req.target_grade),
            target_classroom_id: Set(req.target_classroom_id),
            view_count: Set(0),
            is_pinned: Set(req.is_pinned),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建帖子失败: {e}")))?;

        assemble_boards(&self.db, vec![model])
            .await?
            .pop()
            .ok_or_else(|| SchoolMateError::database_operation("创建帖子失败"))
    }

    pub async fn update_board_impl(
        &self,
        id: i64,
        update: UpdateBoardRequest,
    ) -> Result<Option<Board>> {
        if self.get_board_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }
        if let Some(target_grade) = update.target_grade {
            model.target_grade = Set(Some(target_grade));
        }
        if let Some(target_classroom_id) = update.target_classroom_id {
            model.target_classroom_id = Set(Some(target_classroom_id));
        }
        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新帖子失败: {e}")))?;

        self.get_board_by_id_impl(id).await
    }

    pub async fn soft_delete_board_impl(&self, id: i64) -> Result<bool> {
        let result = Boards::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除帖子失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }

    pub async fn set_board_pinned_impl(&self, id: i64, pinned: bool) -> Result<bool> {
        let result = Boards::update_many()
            .col_expr(Column::IsPinned, Expr::value(pinned))
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新置顶状态失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
