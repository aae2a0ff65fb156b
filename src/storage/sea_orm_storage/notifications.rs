//! 通知存储操作

use super::SeaOrmStorage;
use super::users::load_users_by_ids;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications, Model};
use crate::entity::user_roles::{Column as UserRoleColumn, Entity as UserRoles};
use crate::entity::users::Entity as Users;
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    notifications::{
        entities::Notification,
        requests::{BroadcastNotificationRequest, NotificationListQuery, SendNotificationRequest},
        responses::NotificationListResponse,
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

async fn assemble_notifications<C: ConnectionTrait>(
    db: &C,
    models: Vec<Model>,
) -> Result<Vec<Notification>> {
    let senders = load_users_by_ids(db, models.iter().map(|n| n.sender_id)).await?;
    Ok(models
        .into_iter()
        .map(|n| {
            let sender_name = senders
                .get(&n.sender_id)
                .map(|u| u.name.clone())
                .unwrap_or_default();
            n.into_notification(sender_name)
        })
        .collect())
}

async fn ensure_user_exists<C: ConnectionTrait>(db: &C, user_id: i64, what: &str) -> Result<()> {
    let count = Users::find_by_id(user_id)
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询用户失败: {e}")))?;
    if count == 0 {
        return Err(SchoolMateError::not_found(format!("{what} {user_id} not found")));
    }
    Ok(())
}

fn new_notification(sender_id: i64, receiver_id: i64, title: &str, content: &str) -> ActiveModel {
    ActiveModel {
        sender_id: Set(sender_id),
        receiver_id: Set(receiver_id),
        title: Set(title.to_string()),
        content: Set(content.to_string()),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 发送通知，发送者与接收者都必须存在
    pub async fn send_notification_impl(
        &self,
        sender_id: i64,
        req: SendNotificationRequest,
    ) -> Result<Notification> {
        ensure_user_exists(&self.db, sender_id, "Sender").await?;
        ensure_user_exists(&self.db, req.receiver_id, "Receiver").await?;

        let model = new_notification(sender_id, req.receiver_id, &req.title, &req.content)
            .insert(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("创建通知失败: {e}")))?;

        assemble_notifications(&self.db, vec![model])
            .await?
            .pop()
            .ok_or_else(|| SchoolMateError::database_operation("创建通知失败"))
    }

    /// 向拥有某角色的全部用户发送，返回发送条数
    pub async fn broadcast_notification_impl(
        &self,
        sender_id: i64,
        req: BroadcastNotificationRequest,
    ) -> Result<u64> {
        ensure_user_exists(&self.db, sender_id, "Sender").await?;

        let receivers: Vec<i64> = UserRoles::find()
            .select_only()
            .column(UserRoleColumn::UserId)
            .filter(UserRoleColumn::Role.eq(req.role.as_str()))
            .order_by_asc(UserRoleColumn::UserId)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询接收者失败: {e}")))?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        for receiver_id in &receivers {
            new_notification(sender_id, *receiver_id, &req.title, &req.content)
                .insert(&txn)
                .await
                .map_err(|e| SchoolMateError::database_operation(format!("批量创建通知失败: {e}")))?;
        }
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(receivers.len() as u64)
    }

    pub async fn get_notification_by_id_impl(&self, id: i64) -> Result<Option<Notification>> {
        let model = Notifications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询通知失败: {e}")))?;
        match model {
            Some(model) => Ok(assemble_notifications(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 列出用户收到的通知（分页）
    pub async fn list_notifications_with_pagination_impl(
        &self,
        receiver_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Notifications::find().filter(Column::ReceiverId.eq(receiver_id));
        if query.unread_only {
            select = select.filter(Column::IsRead.eq(false));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询通知总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询通知页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: assemble_notifications(&self.db, models).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn count_unread_notifications_impl(&self, receiver_id: i64) -> Result<u64> {
        Notifications::find()
            .filter(Column::ReceiverId.eq(receiver_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询未读通知数量失败: {e}")))
    }

    pub async fn mark_notification_read_impl(&self, id: i64) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("标记通知已读失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }

    pub async fn mark_all_notifications_read_impl(&self, receiver_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::ReceiverId.eq(receiver_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("标记全部通知已读失败: {e}")))?;
        Ok(result.rows_affected)
    }

    pub async fn delete_notification_impl(&self, id: i64) -> Result<bool> {
        let result = Notifications::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除通知失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
