use super::SeaOrmStorage;
use super::users::{NewAccount, insert_account, load_users_by_ids, update_account_basics};
use crate::entity::staff_infos::{ActiveModel, Column, Entity as StaffInfos, Model};
use crate::entity::users::{self, Entity as Users};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    staff::{
        entities::{Staff, StaffSearchType, StaffStatus},
        requests::{CreateStaffRequest, StaffListQuery, UpdateStaffRequest},
        responses::StaffListResponse,
    },
    teachers::entities::EmploymentType,
    users::entities::{UserRole, UserStatus},
};
use crate::utils::like_contains;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

async fn ensure_staff_code_available<C: ConnectionTrait>(
    db: &C,
    code: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = StaffInfos::find().filter(Column::Code.eq(code));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }
    let count = select
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询职员编号失败: {e}")))?;
    if count > 0 {
        return Err(SchoolMateError::conflict(format!(
            "Staff code '{code}' already exists"
        )));
    }
    Ok(())
}

async fn assemble_staff<C: ConnectionTrait>(db: &C, infos: Vec<Model>) -> Result<Vec<Staff>> {
    let users = load_users_by_ids(db, infos.iter().map(|t| t.user_id)).await?;
    Ok(infos
        .into_iter()
        .filter_map(|info| {
            let user = users.get(&info.user_id)?;
            Some(info.into_staff(user))
        })
        .collect())
}

async fn insert_staff<C: ConnectionTrait>(db: &C, req: CreateStaffRequest) -> Result<Staff> {
    ensure_staff_code_available(db, &req.code, None).await?;
    let user = insert_account(
        db,
        NewAccount {
            email: &req.email,
            password_hash: &req.password,
            name: &req.name,
            phone: req.phone.as_deref(),
            status: UserStatus::Active,
        },
        &[UserRole::Staff],
    )
    .await?;

    let now = chrono::Utc::now().timestamp();
    let info = ActiveModel {
        user_id: Set(user.id),
        code: Set(req.code),
        job_title: Set(req.job_title),
        work_location: Set(req.work_location),
        status: Set(StaffStatus::Employed.to_string()),
        employment_type: Set(req
            .employment_type
            .unwrap_or(EmploymentType::Permanent)
            .to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("创建职员失败: {e}")))?;
    Ok(info.into_staff(&user))
}

impl SeaOrmStorage {
    pub async fn create_staff_impl(&self, req: CreateStaffRequest) -> Result<Staff> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let created = insert_staff(&txn, req).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(created)
    }

    /// 批量导入，任一行失败则全部回滚
    pub async fn import_staff_impl(&self, rows: Vec<CreateStaffRequest>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let count = rows.len();
        for row in rows {
            insert_staff(&txn, row).await?;
        }
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(count)
    }

    pub async fn get_staff_by_id_impl(&self, id: i64) -> Result<Option<Staff>> {
        let info = StaffInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询职员失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_staff(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get_staff_by_user_id_impl(&self, user_id: i64) -> Result<Option<Staff>> {
        let info = StaffInfos::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询职员失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_staff(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn list_staff_with_pagination_impl(
        &self,
        query: StaffListQuery,
    ) -> Result<StaffListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = StaffInfos::find();

        if let Some(keyword) = query.keyword.as_deref().map(str::trim)
            && !keyword.is_empty()
        {
            let users_matching = |col: users::Column| {
                Column::UserId.in_subquery(
                    Query::select()
                        .column(users::Column::Id)
                        .from(Users)
                        .cond_where(like_contains(col, keyword))
                        .to_owned(),
                )
            };
            select = select.filter(match query.search_type {
                Some(StaffSearchType::Name) => {
                    Condition::all().add(users_matching(users::Column::Name))
                }
                Some(StaffSearchType::Email) => {
                    Condition::all().add(users_matching(users::Column::Email))
                }
                Some(StaffSearchType::Code) => like_contains(Column::Code, keyword),
                Some(StaffSearchType::JobTitle) => like_contains(Column::JobTitle, keyword),
                None => Condition::any()
                    .add(users_matching(users::Column::Name))
                    .add(users_matching(users::Column::Email))
                    .add(like_contains(Column::Code, keyword)),
            });
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let paginator = select.order_by_desc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询职员总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询职员页数失败: {e}")))?;
        let infos = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询职员列表失败: {e}")))?;

        Ok(StaffListResponse {
            items: assemble_staff(&self.db, infos).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_staff_impl(
        &self,
        id: i64,
        update: UpdateStaffRequest,
    ) -> Result<Option<Staff>> {
        let Some(existing) = StaffInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询职员失败: {e}")))?
        else {
            return Ok(None);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        if let Some(ref code) = update.code
            && *code != existing.code
        {
            ensure_staff_code_available(&txn, code, Some(id)).await?;
        }
        update_account_basics(&txn, existing.user_id, update.name, update.phone).await?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(job_title) = update.job_title {
            model.job_title = Set(Some(job_title));
        }
        if let Some(work_location) = update.work_location {
            model.work_location = Set(Some(work_location));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(employment_type) = update.employment_type {
            model.employment_type = Set(employment_type.to_string());
        }
        model
            .update(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新职员失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_staff_by_id_impl(id).await
    }

    pub async fn set_staff_status_impl(&self, id: i64, status: StaffStatus) -> Result<bool> {
        let result = StaffInfos::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新职员状态失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
