use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::user_roles::{self, Entity as UserRoles};
use crate::entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    users::{
        entities::{User, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::like_contains;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 新账号的字段（密码已哈希）
pub(super) struct NewAccount<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub status: UserStatus,
}

/// 检查邮箱是否可用
pub(super) async fn ensure_email_available<C: ConnectionTrait>(db: &C, email: &str) -> Result<()> {
    let exists = Users::find()
        .filter(Column::Email.eq(email))
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询邮箱失败: {e}")))?;
    if exists > 0 {
        return Err(SchoolMateError::conflict(format!(
            "Email '{email}' is already registered"
        )));
    }
    Ok(())
}

/// 插入账号并写入角色
pub(super) async fn insert_account<C: ConnectionTrait>(
    db: &C,
    account: NewAccount<'_>,
    roles: &[UserRole],
) -> Result<UserModel> {
    ensure_email_available(db, account.email).await?;

    let now = chrono::Utc::now().timestamp();
    let model = ActiveModel {
        email: Set(account.email.to_string()),
        password_hash: Set(account.password_hash.to_string()),
        name: Set(account.name.to_string()),
        phone: Set(account.phone.map(str::to_string)),
        status: Set(account.status.to_string()),
        profile_image: Set(None),
        last_login: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let user = model
        .insert(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建用户失败: {e}")))?;

    for role in roles {
        add_role_if_missing(db, user.id, *role).await?;
    }
    Ok(user)
}

/// 添加角色，已存在时不变
pub(super) async fn add_role_if_missing<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    role: UserRole,
) -> Result<()> {
    let exists = UserRoles::find()
        .filter(user_roles::Column::UserId.eq(user_id))
        .filter(user_roles::Column::Role.eq(role.as_str()))
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询用户角色失败: {e}")))?;
    if exists > 0 {
        return Ok(());
    }

    user_roles::ActiveModel {
        user_id: Set(user_id),
        role: Set(role.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("添加用户角色失败: {e}")))?;
    Ok(())
}

/// 读取单个用户的角色（按声明顺序）
pub(super) async fn load_roles<C: ConnectionTrait>(db: &C, user_id: i64) -> Result<Vec<UserRole>> {
    Ok(load_roles_for(db, &[user_id])
        .await?
        .remove(&user_id)
        .unwrap_or_default())
}

/// 批量读取角色
pub(super) async fn load_roles_for<C: ConnectionTrait>(
    db: &C,
    user_ids: &[i64],
) -> Result<HashMap<i64, Vec<UserRole>>> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = UserRoles::find()
        .filter(user_roles::Column::UserId.is_in(user_ids.iter().copied()))
        .all(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询用户角色失败: {e}")))?;

    let mut map: HashMap<i64, Vec<UserRole>> = HashMap::new();
    for row in rows {
        if let Ok(role) = row.role.parse::<UserRole>() {
            map.entry(row.user_id).or_default().push(role);
        }
    }
    for roles in map.values_mut() {
        roles.sort();
        roles.dedup();
    }
    Ok(map)
}

/// 批量读取账号
pub(super) async fn load_users_by_ids<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, UserModel>> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let users = Users::find()
        .filter(Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询用户失败: {e}")))?;
    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}

/// 更新账号的公共字段（姓名、电话）
pub(super) async fn update_account_basics<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    name: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    if name.is_none() && phone.is_none() {
        return Ok(());
    }
    let mut model = ActiveModel {
        id: Set(user_id),
        updated_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };
    if let Some(name) = name {
        model.name = Set(name);
    }
    if let Some(phone) = phone {
        model.phone = Set(Some(phone));
    }
    model
        .update(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("更新用户失败: {e}")))?;
    Ok(())
}

impl SeaOrmStorage {
    /// 创建用户（含角色）
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        let user = insert_account(
            &txn,
            NewAccount {
                email: &req.email,
                password_hash: &req.password,
                name: &req.name,
                phone: req.phone.as_deref(),
                status: UserStatus::Active,
            },
            &req.roles,
        )
        .await?;

        if let Some(profile_image) = req.profile_image {
            ActiveModel {
                id: Set(user.id),
                profile_image: Set(Some(profile_image)),
                ..Default::default()
            }
            .update(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新用户头像失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_user_by_id_impl(user.id)
            .await?
            .ok_or_else(|| SchoolMateError::not_found("User not found after creation"))
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询用户失败: {e}")))?;

        match result {
            Some(model) => {
                let roles = load_roles(&self.db, model.id).await?;
                Ok(Some(model.into_user(roles)))
            }
            None => Ok(None),
        }
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询用户失败: {e}")))?;

        match result {
            Some(model) => {
                let roles = load_roles(&self.db, model.id).await?;
                Ok(Some(model.into_user(roles)))
            }
            None => Ok(None),
        }
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Users::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Name, search))
                    .add(like_contains(Column::Email, search)),
            );
        }

        if let Some(role) = query.role {
            select = select.filter(
                Column::Id.in_subquery(
                    Query::select()
                        .column(user_roles::Column::UserId)
                        .from(UserRoles)
                        .and_where(user_roles::Column::Role.eq(role.as_str()))
                        .to_owned(),
                ),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let paginator = select.order_by_desc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询用户总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询用户页数失败: {e}")))?;
        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询用户列表失败: {e}")))?;

        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        let mut roles = load_roles_for(&self.db, &ids).await?;

        Ok(UserListResponse {
            items: users
                .into_iter()
                .map(|m| {
                    let user_roles = roles.remove(&m.id).unwrap_or_default();
                    m.into_user(user_roles)
                })
                .collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        if Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询用户失败: {e}")))?
            .is_none()
        {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(profile_image) = update.profile_image {
            model.profile_image = Set(Some(profile_image));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新用户失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    /// 为用户添加角色
    pub async fn add_user_role_impl(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        if self.get_user_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }
        add_role_if_missing(&self.db, id, role).await?;
        self.get_user_by_id_impl(id).await
    }

    /// 移除用户角色，不能移除最后一个角色
    pub async fn remove_user_role_impl(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        let Some(user) = self.get_user_by_id_impl(id).await? else {
            return Ok(None);
        };

        let remaining = crate::models::users::entities::RoleSet::new(user.roles)
            .map_err(SchoolMateError::invalid_state)?
            .without(role)
            .map_err(SchoolMateError::invalid_state)?;

        if !remaining.contains(role) {
            UserRoles::delete_many()
                .filter(user_roles::Column::UserId.eq(id))
                .filter(user_roles::Column::Role.eq(role.as_str()))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    SchoolMateError::database_operation(format!("移除用户角色失败: {e}"))
                })?;
        }

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户（关联的身份信息级联删除）
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }
}
