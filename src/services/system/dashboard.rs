use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, AppStartTime,
    system::responses::{DashboardResponse, SystemInfoResponse},
};
use crate::services::{current_setting, error_response};

/// 当前学年的在籍人数统计
pub async fn get_dashboard(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let setting = match current_setting(&storage).await {
        Ok(setting) => setting,
        Err(e) => return Ok(error_response(&e, None)),
    };

    match storage.dashboard_stats(setting.current_school_year).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DashboardResponse { stats },
            "Dashboard retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn get_info(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);
    let uptime_seconds = chrono::Utc::now()
        .signed_duration_since(started_at)
        .num_seconds();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SystemInfoResponse {
            system_name: config.app.system_name.clone(),
            school_name: config.school.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: config.app.environment.clone(),
            started_at,
            uptime_seconds,
        },
        "System info retrieved successfully",
    )))
}
