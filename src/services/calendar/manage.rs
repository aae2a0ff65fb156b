use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use super::{CalendarService, today};
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    calendar::{
        requests::{CreateEventRequest, UpdateEventRequest},
        responses::CalendarEventResponse,
    },
};
use crate::services::{error_response, not_found};

const MAX_TITLE_LEN: usize = 100;

/// 标题与日期校验，结束日期不能早于开始日期
pub(super) fn validate_event(
    title: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Result<(), SchoolMateError> {
    let len = title.trim().chars().count();
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(SchoolMateError::validation(format!(
            "Title must be 1-{MAX_TITLE_LEN} characters"
        )));
    }
    if end_date.is_some_and(|end| end < start_date) {
        return Err(SchoolMateError::validation(
            "End date must not be before start date",
        ));
    }
    Ok(())
}

pub async fn create_event(
    service: &CalendarService,
    event_data: CreateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(e) = validate_event(&event_data.title, event_data.start_date, event_data.end_date) {
        return Ok(error_response(&e, None));
    }

    match storage.create_event(event_data).await {
        Ok(event) => {
            tracing::info!("Calendar event {} created: {}", event.id, event.title);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CalendarEventResponse {
                    event: event.into_view(today()),
                },
                "Event created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 修改后的日期组合仍需满足先后关系
pub async fn update_event(
    service: &CalendarService,
    event_id: i64,
    update_data: UpdateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => return Ok(not_found(ErrorCode::CalendarEventNotFound, "Event not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };

    let title = update_data.title.as_deref().unwrap_or(&existing.title);
    let start_date = update_data.start_date.unwrap_or(existing.start_date);
    let end_date = if update_data.clear_end_date {
        None
    } else {
        update_data.end_date.or(existing.end_date)
    };
    if let Err(e) = validate_event(title, start_date, end_date) {
        return Ok(error_response(&e, None));
    }

    match storage.update_event(event_id, update_data).await {
        Ok(Some(event)) => {
            tracing::info!("Calendar event {} updated", event_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CalendarEventResponse {
                    event: event.into_view(today()),
                },
                "Event updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::CalendarEventNotFound, "Event not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_event(
    service: &CalendarService,
    event_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_event(event_id).await {
        Ok(true) => {
            tracing::info!("Calendar event {} deleted", event_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Event deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::CalendarEventNotFound, "Event not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_validate_event() {
        assert!(validate_event("개학식", d(3), None).is_ok());
        assert!(validate_event("중간고사", d(3), Some(d(3))).is_ok());
        assert!(validate_event("중간고사", d(3), Some(d(7))).is_ok());

        let err = validate_event("중간고사", d(7), Some(d(3))).unwrap_err();
        assert!(matches!(err, SchoolMateError::Validation(_)));

        assert!(validate_event("   ", d(3), None).is_err());
    }
}
