use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacilityService;
use crate::models::{
    ApiResponse, ErrorCode,
    facilities::{
        requests::{
            CreateFacilityRequest, FacilityListParams, FacilityListQuery, UpdateFacilityRequest,
        },
        responses::FacilityResponse,
    },
};
use crate::services::{bad_request, error_response, not_found};

fn validate_facility(name: Option<&str>, capacity: Option<i32>) -> Result<(), &'static str> {
    if let Some(name) = name {
        let len = name.trim().chars().count();
        if len == 0 || len > 100 {
            return Err("Facility name must be 1-100 characters");
        }
    }
    if capacity.is_some_and(|c| c < 0) {
        return Err("Capacity cannot be negative");
    }
    Ok(())
}

pub async fn list_facilities(
    service: &FacilityService,
    query: FacilityListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let list_query = FacilityListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        is_available: query.is_available,
    };

    match storage.list_facilities_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Facility list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn get_facility(
    service: &FacilityService,
    facility_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_facility_by_id(facility_id).await {
        Ok(Some(facility)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FacilityResponse { facility },
            "Facility retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::FacilityNotFound, "Facility not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn create_facility(
    service: &FacilityService,
    facility_data: CreateFacilityRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_facility(Some(&facility_data.name), facility_data.capacity) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.create_facility(facility_data).await {
        Ok(facility) => {
            tracing::info!("Facility {} ({}) created", facility.id, facility.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                FacilityResponse { facility },
                "Facility created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_facility(
    service: &FacilityService,
    facility_id: i64,
    update_data: UpdateFacilityRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_facility(update_data.name.as_deref(), update_data.capacity) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    match storage.update_facility(facility_id, update_data).await {
        Ok(Some(facility)) => {
            tracing::info!("Facility {} updated", facility_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FacilityResponse { facility },
                "Facility updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::FacilityNotFound, "Facility not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_facility(
    service: &FacilityService,
    facility_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_facility(facility_id).await {
        Ok(true) => {
            tracing::info!("Facility {} deleted", facility_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Facility deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::FacilityNotFound, "Facility not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_facility() {
        assert!(validate_facility(Some("과학실"), Some(30)).is_ok());
        assert!(validate_facility(None, None).is_ok());
        assert!(validate_facility(Some("  "), None).is_err());
        assert!(validate_facility(Some("체육관"), Some(-1)).is_err());
    }
}
