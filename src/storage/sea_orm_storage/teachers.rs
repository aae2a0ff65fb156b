use super::SeaOrmStorage;
use super::users::{NewAccount, insert_account, load_users_by_ids, update_account_basics};
use crate::entity::classrooms::{Column as ClassroomColumn, Entity as Classrooms};
use crate::entity::teacher_infos::{ActiveModel, Column, Entity as TeacherInfos, Model};
use crate::entity::users::{self, Entity as Users};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    teachers::{
        entities::{EmploymentType, Teacher, TeacherSearchType, TeacherStatus},
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::entities::{UserRole, UserStatus},
};
use crate::utils::like_contains;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

async fn ensure_teacher_code_available<C: ConnectionTrait>(
    db: &C,
    code: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = TeacherInfos::find().filter(Column::Code.eq(code));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }
    let count = select
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询教职工号失败: {e}")))?;
    if count > 0 {
        return Err(SchoolMateError::conflict(format!(
            "Teacher code '{code}' already exists"
        )));
    }
    Ok(())
}

async fn assemble_teachers<C: ConnectionTrait>(db: &C, infos: Vec<Model>) -> Result<Vec<Teacher>> {
    let users = load_users_by_ids(db, infos.iter().map(|t| t.user_id)).await?;
    Ok(infos
        .into_iter()
        .filter_map(|info| {
            let user = users.get(&info.user_id)?;
            Some(info.into_teacher(user))
        })
        .collect())
}

async fn insert_teacher<C: ConnectionTrait>(db: &C, req: CreateTeacherRequest) -> Result<Teacher> {
    ensure_teacher_code_available(db, &req.code, None).await?;
    let user = insert_account(
        db,
        NewAccount {
            email: &req.email,
            password_hash: &req.password,
            name: &req.name,
            phone: req.phone.as_deref(),
            status: UserStatus::Active,
        },
        &[UserRole::Teacher],
    )
    .await?;

    let now = chrono::Utc::now().timestamp();
    let info = ActiveModel {
        user_id: Set(user.id),
        code: Set(req.code),
        subject: Set(req.subject),
        department: Set(req.department),
        position: Set(req.position),
        status: Set(TeacherStatus::Employed.to_string()),
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
    .map_err(|e| SchoolMateError::database_operation(format!("创建教师失败: {e}")))?;
    Ok(info.into_teacher(&user))
}

impl SeaOrmStorage {
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let created = insert_teacher(&txn, req).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(created)
    }

    /// 批量导入，任一行失败则全部回滚
    pub async fn import_teachers_impl(&self, rows: Vec<CreateTeacherRequest>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let count = rows.len();
        for row in rows {
            insert_teacher(&txn, row).await?;
        }
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(count)
    }

    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let info = TeacherInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_teachers(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let info = TeacherInfos::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_teachers(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get_teacher_by_code_impl(&self, code: &str) -> Result<Option<Teacher>> {
        let info = TeacherInfos::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_teachers(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = TeacherInfos::find();

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
                Some(TeacherSearchType::Name) => {
                    Condition::all().add(users_matching(users::Column::Name))
                }
                Some(TeacherSearchType::Email) => {
                    Condition::all().add(users_matching(users::Column::Email))
                }
                Some(TeacherSearchType::Code) => like_contains(Column::Code, keyword),
                Some(TeacherSearchType::Subject) => like_contains(Column::Subject, keyword),
                Some(TeacherSearchType::Department) => like_contains(Column::Department, keyword),
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
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师页数失败: {e}")))?;
        let infos = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: assemble_teachers(&self.db, infos).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let Some(existing) = TeacherInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?
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
            ensure_teacher_code_available(&txn, code, Some(id)).await?;
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
        if let Some(subject) = update.subject {
            model.subject = Set(Some(subject));
        }
        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }
        if let Some(position) = update.position {
            model.position = Set(Some(position));
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
            .map_err(|e| SchoolMateError::database_operation(format!("更新教师失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    pub async fn set_teacher_status_impl(&self, id: i64, status: TeacherStatus) -> Result<bool> {
        let result = TeacherInfos::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新教师状态失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }

    /// 在职且该学年未担任班主任的教师
    pub async fn list_available_homeroom_teachers_impl(
        &self,
        school_year: i32,
    ) -> Result<Vec<Teacher>> {
        let infos = TeacherInfos::find()
            .filter(Column::Status.eq(TeacherStatus::Employed.as_str()))
            .filter(
                Column::Id.not_in_subquery(
                    Query::select()
                        .column(ClassroomColumn::HomeroomTeacherId)
                        .from(Classrooms)
                        .and_where(ClassroomColumn::SchoolYear.eq(school_year))
                        .and_where(ClassroomColumn::HomeroomTeacherId.is_not_null())
                        .to_owned(),
                ),
            )
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?;

        assemble_teachers(&self.db, infos).await
    }
}
