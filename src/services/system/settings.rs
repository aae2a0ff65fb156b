use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SettingCache, SystemService};
use crate::models::{
    ApiResponse, ErrorCode,
    system::{requests::UpdateSystemSettingRequest, responses::SystemSettingResponse},
};
use crate::services::{bad_request, current_setting, error_response};
use crate::utils::validate::validate_semester;

/// 当前学年与学期，未保存过时返回配置默认值
pub async fn get_settings(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match current_setting(&storage).await {
        Ok(setting) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SystemSettingResponse { setting },
            "Settings retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_settings(
    service: &SystemService,
    update_data: UpdateSystemSettingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_semester(update_data.current_semester) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if !(2000..=2100).contains(&update_data.current_school_year) {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "School year must be between 2000 and 2100",
        ));
    }

    match storage.update_system_setting(update_data).await {
        Ok(setting) => {
            SettingCache::update(setting.clone()).await;
            tracing::info!(
                "System setting changed to school year {} semester {}",
                setting.current_school_year,
                setting.current_semester
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SystemSettingResponse { setting },
                "Settings updated successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}
