use std::collections::HashMap;

use super::SeaOrmStorage;
use super::users::{NewAccount, insert_account, load_users_by_ids, update_account_basics};
use crate::entity::family_relations::{
    ActiveModel as RelationActiveModel, Column as RelationColumn, Entity as FamilyRelations,
};
use crate::entity::parent_infos::{ActiveModel, Column, Entity as ParentInfos, Model};
use crate::entity::student_infos::{self, Entity as StudentInfos};
use crate::entity::users::{self, Entity as Users};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    parents::{
        entities::{Parent, ParentChild, ParentSearchType, ParentStatus},
        requests::{CreateParentRequest, LinkChildRequest, ParentListQuery, UpdateParentRequest},
        responses::ParentListResponse,
    },
    users::entities::{UserRole, UserStatus},
};
use crate::utils::like_contains;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 家长 ID -> 子女列表
async fn load_children<C: ConnectionTrait>(
    db: &C,
    parent_ids: &[i64],
) -> Result<HashMap<i64, Vec<ParentChild>>> {
    if parent_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = FamilyRelations::find()
        .filter(RelationColumn::ParentInfoId.is_in(parent_ids.iter().copied()))
        .order_by_asc(RelationColumn::Id)
        .find_also_related(StudentInfos)
        .all(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询家庭关系失败: {e}")))?;

    let users = load_users_by_ids(
        db,
        rows.iter()
            .filter_map(|(_, student)| student.as_ref().map(|s| s.user_id)),
    )
    .await?;

    let mut map: HashMap<i64, Vec<ParentChild>> = HashMap::new();
    for (relation, student) in rows {
        let Some(student) = student else { continue };
        let Some(user) = users.get(&student.user_id) else {
            continue;
        };
        let parent_id = relation.parent_info_id;
        map.entry(parent_id)
            .or_default()
            .push(relation.into_child(&student, user));
    }
    Ok(map)
}

async fn assemble_parents<C: ConnectionTrait>(db: &C, infos: Vec<Model>) -> Result<Vec<Parent>> {
    let users = load_users_by_ids(db, infos.iter().map(|p| p.user_id)).await?;
    let ids: Vec<i64> = infos.iter().map(|p| p.id).collect();
    let mut children = load_children(db, &ids).await?;
    Ok(infos
        .into_iter()
        .filter_map(|info| {
            let user = users.get(&info.user_id)?;
            let kids = children.remove(&info.id).unwrap_or_default();
            Some(info.into_parent(user, kids))
        })
        .collect())
}

async fn insert_parent<C: ConnectionTrait>(db: &C, req: CreateParentRequest) -> Result<Parent> {
    let user = insert_account(
        db,
        NewAccount {
            email: &req.email,
            password_hash: &req.password,
            name: &req.name,
            phone: req.phone.as_deref(),
            status: UserStatus::Active,
        },
        &[UserRole::Parent],
    )
    .await?;

    let now = chrono::Utc::now().timestamp();
    let info = ActiveModel {
        user_id: Set(user.id),
        code: Set(req.code),
        status: Set(req.status.unwrap_or(ParentStatus::Active).to_string()),
        emergency_contact: Set(req.emergency_contact),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("创建家长失败: {e}")))?;
    Ok(info.into_parent(&user, Vec::new()))
}

impl SeaOrmStorage {
    /// 创建家长（账号 + 家长信息），未指定状态时为 ACTIVE
    pub async fn create_parent_impl(&self, req: CreateParentRequest) -> Result<Parent> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let created = insert_parent(&txn, req).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(created)
    }

    /// 批量导入，任一行失败则全部回滚
    pub async fn import_parents_impl(&self, rows: Vec<CreateParentRequest>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let count = rows.len();
        for row in rows {
            insert_parent(&txn, row).await?;
        }
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(count)
    }

    pub async fn get_parent_by_id_impl(&self, id: i64) -> Result<Option<Parent>> {
        let info = ParentInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家长失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_parents(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get_parent_by_user_id_impl(&self, user_id: i64) -> Result<Option<Parent>> {
        let info = ParentInfos::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家长失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_parents(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn list_parents_with_pagination_impl(
        &self,
        query: ParentListQuery,
    ) -> Result<ParentListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = ParentInfos::find();

        if let Some(keyword) = query.keyword.as_deref().map(str::trim)
            && !keyword.is_empty()
        {
            let matching_users = |col: users::Column| {
                Query::select()
                    .column(users::Column::Id)
                    .from(Users)
                    .cond_where(like_contains(col, keyword))
                    .to_owned()
            };
            // 子女姓名：家长 <- 家庭关系 <- 学籍 <- 账号
            let by_child_name = Column::Id.in_subquery(
                Query::select()
                    .column(RelationColumn::ParentInfoId)
                    .from(FamilyRelations)
                    .and_where(
                        RelationColumn::StudentInfoId.in_subquery(
                            Query::select()
                                .column(student_infos::Column::Id)
                                .from(StudentInfos)
                                .and_where(
                                    student_infos::Column::UserId
                                        .in_subquery(matching_users(users::Column::Name)),
                                )
                                .to_owned(),
                        ),
                    )
                    .to_owned(),
            );

            select = select.filter(match query.search_type {
                Some(ParentSearchType::Name) => Condition::all()
                    .add(Column::UserId.in_subquery(matching_users(users::Column::Name))),
                Some(ParentSearchType::Email) => Condition::all()
                    .add(Column::UserId.in_subquery(matching_users(users::Column::Email))),
                Some(ParentSearchType::Phone) => Condition::all()
                    .add(Column::UserId.in_subquery(matching_users(users::Column::Phone))),
                Some(ParentSearchType::ChildName) => Condition::all().add(by_child_name),
                None => Condition::any()
                    .add(Column::UserId.in_subquery(matching_users(users::Column::Name)))
                    .add(Column::UserId.in_subquery(matching_users(users::Column::Email)))
                    .add(by_child_name),
            });
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let paginator = select.order_by_desc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家长总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家长页数失败: {e}")))?;
        let infos = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家长列表失败: {e}")))?;

        Ok(ParentListResponse {
            items: assemble_parents(&self.db, infos).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_parent_impl(
        &self,
        id: i64,
        update: UpdateParentRequest,
    ) -> Result<Option<Parent>> {
        let Some(existing) = ParentInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家长失败: {e}")))?
        else {
            return Ok(None);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        update_account_basics(&txn, existing.user_id, update.name, update.phone).await?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(code) = update.code {
            model.code = Set(Some(code));
        }
        if let Some(emergency_contact) = update.emergency_contact {
            model.emergency_contact = Set(Some(emergency_contact));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        model
            .update(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新家长失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_parent_by_id_impl(id).await
    }

    pub async fn set_parent_status_impl(&self, id: i64, status: ParentStatus) -> Result<bool> {
        let result = ParentInfos::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新家长状态失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }

    /// 关联子女；设为代表监护人时清除该学生其他关系上的标记
    pub async fn link_child_impl(&self, parent_id: i64, req: LinkChildRequest) -> Result<ParentChild> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        ParentInfos::find_by_id(parent_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家长失败: {e}")))?
            .ok_or_else(|| SchoolMateError::not_found("Parent not found"))?;
        let student = StudentInfos::find_by_id(req.student_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?
            .ok_or_else(|| SchoolMateError::not_found("Student not found"))?;

        let existing = FamilyRelations::find()
            .filter(RelationColumn::ParentInfoId.eq(parent_id))
            .filter(RelationColumn::StudentInfoId.eq(req.student_id))
            .count(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询家庭关系失败: {e}")))?;
        if existing > 0 {
            return Err(SchoolMateError::conflict(
                "This student is already linked to the parent",
            ));
        }

        if req.is_representative {
            FamilyRelations::update_many()
                .col_expr(RelationColumn::IsRepresentative, Expr::value(false))
                .filter(RelationColumn::StudentInfoId.eq(req.student_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    SchoolMateError::database_operation(format!("更新代表监护人失败: {e}"))
                })?;
        }

        let relation = RelationActiveModel {
            student_info_id: Set(req.student_id),
            parent_info_id: Set(parent_id),
            relationship: Set(req.relationship.to_string()),
            is_representative: Set(req.is_representative),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建家庭关系失败: {e}")))?;

        let student_user = Users::find_by_id(student.user_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询用户失败: {e}")))?
            .ok_or_else(|| SchoolMateError::not_found("Student account not found"))?;

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(relation.into_child(&student, &student_user))
    }

    pub async fn unlink_child_impl(&self, parent_id: i64, student_id: i64) -> Result<bool> {
        let result = FamilyRelations::delete_many()
            .filter(RelationColumn::ParentInfoId.eq(parent_id))
            .filter(RelationColumn::StudentInfoId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除家庭关系失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_children_impl(&self, parent_id: i64) -> Result<Vec<ParentChild>> {
        Ok(load_children(&self.db, &[parent_id])
            .await?
            .remove(&parent_id)
            .unwrap_or_default())
    }
}
