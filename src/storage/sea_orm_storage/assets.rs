use super::SeaOrmStorage;
use crate::entity::school_assets::{ActiveModel, Column, Entity as SchoolAssets};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    assets::{
        entities::{Asset, AssetStatus},
        requests::{AssetListQuery, CreateAssetRequest, UpdateAssetRequest},
        responses::AssetListResponse,
    },
};
use crate::utils::like_contains;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

async fn ensure_asset_code_available<C: ConnectionTrait>(
    db: &C,
    code: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = SchoolAssets::find().filter(Column::Code.eq(code));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }
    let count = select
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询资产编号失败: {e}")))?;
    if count > 0 {
        return Err(SchoolMateError::conflict(format!(
            "Asset code '{code}' already exists"
        )));
    }
    Ok(())
}

impl SeaOrmStorage {
    /// 关键字匹配名称或编号
    pub async fn list_assets_with_pagination_impl(
        &self,
        query: AssetListQuery,
    ) -> Result<AssetListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = SchoolAssets::find();
        if let Some(keyword) = query.keyword.as_deref().map(str::trim)
            && !keyword.is_empty()
        {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Name, keyword))
                    .add(like_contains(Column::Code, keyword)),
            );
        }
        if let Some(category) = query.category.as_deref().map(str::trim)
            && !category.is_empty()
        {
            select = select.filter(Column::Category.eq(category));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let paginator = select.order_by_desc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询资产总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询资产页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询资产列表失败: {e}")))?;

        Ok(AssetListResponse {
            items: models.into_iter().map(|m| m.into_asset()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn get_asset_by_id_impl(&self, id: i64) -> Result<Option<Asset>> {
        let model = SchoolAssets::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询资产失败: {e}")))?;
        Ok(model.map(|m| m.into_asset()))
    }

    pub async fn create_asset_impl(&self, req: CreateAssetRequest) -> Result<Asset> {
        ensure_asset_code_available(&self.db, &req.code, None).await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            category: Set(req.category),
            location: Set(req.location),
            status: Set(req.status.unwrap_or(AssetStatus::Available).to_string()),
            purchase_date: Set(req.purchase_date),
            description: Set(req.description),
            image_filename: Set(req.image_filename),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建资产失败: {e}")))?;
        Ok(model.into_asset())
    }

    pub async fn update_asset_impl(
        &self,
        id: i64,
        update: UpdateAssetRequest,
    ) -> Result<Option<Asset>> {
        let Some(existing) = self.get_asset_by_id_impl(id).await? else {
            return Ok(None);
        };
        if let Some(ref code) = update.code
            && *code != existing.code
        {
            ensure_asset_code_available(&self.db, code, Some(id)).await?;
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(category) = update.category {
            model.category = Set(Some(category));
        }
        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }
        if let Some(purchase_date) = update.purchase_date {
            model.purchase_date = Set(Some(purchase_date));
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(image_filename) = update.image_filename {
            model.image_filename = Set(Some(image_filename));
        }

        let model = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新资产失败: {e}")))?;
        Ok(Some(model.into_asset()))
    }

    pub async fn set_asset_status_impl(&self, id: i64, status: AssetStatus) -> Result<bool> {
        let result = SchoolAssets::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新资产状态失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_asset_impl(&self, id: i64) -> Result<bool> {
        let result = SchoolAssets::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除资产失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
