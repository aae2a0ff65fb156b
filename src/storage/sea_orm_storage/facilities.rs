use super::SeaOrmStorage;
use crate::entity::school_facilities::{ActiveModel, Column, Entity as SchoolFacilities};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    facilities::{
        entities::Facility,
        requests::{CreateFacilityRequest, FacilityListQuery, UpdateFacilityRequest},
        responses::FacilityListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn list_facilities_with_pagination_impl(
        &self,
        query: FacilityListQuery,
    ) -> Result<FacilityListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = SchoolFacilities::find();
        if let Some(is_available) = query.is_available {
            select = select.filter(Column::IsAvailable.eq(is_available));
        }

        let paginator = select.order_by_asc(Column::Name).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询设施总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询设施页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询设施列表失败: {e}")))?;

        Ok(FacilityListResponse {
            items: models.into_iter().map(|m| m.into_facility()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn get_facility_by_id_impl(&self, id: i64) -> Result<Option<Facility>> {
        let model = SchoolFacilities::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询设施失败: {e}")))?;
        Ok(model.map(|m| m.into_facility()))
    }

    pub async fn create_facility_impl(&self, req: CreateFacilityRequest) -> Result<Facility> {
        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            name: Set(req.name),
            location: Set(req.location),
            capacity: Set(req.capacity),
            description: Set(req.description),
            is_available: Set(req.is_available.unwrap_or(true)),
            image_filename: Set(req.image_filename),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建设施失败: {e}")))?;
        Ok(model.into_facility())
    }

    pub async fn update_facility_impl(
        &self,
        id: i64,
        update: UpdateFacilityRequest,
    ) -> Result<Option<Facility>> {
        if self.get_facility_by_id_impl(id).await?.is_none() {
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
        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(Some(capacity));
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(is_available) = update.is_available {
            model.is_available = Set(is_available);
        }
        if let Some(image_filename) = update.image_filename {
            model.image_filename = Set(Some(image_filename));
        }

        let model = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新设施失败: {e}")))?;
        Ok(Some(model.into_facility()))
    }

    pub async fn delete_facility_impl(&self, id: i64) -> Result<bool> {
        let result = SchoolFacilities::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除设施失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
